//! External tool invocation.

use crate::domain::AppError;

/// Port for running an external command to completion.
///
/// Implementations block until the process exits and return its trimmed stdout.
/// A spawn failure or non-zero exit becomes `AppError::ToolFailed`.
pub trait CommandRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<String, AppError>;
}

/// Plain functions and closures can stand in for a runner.
impl<F> CommandRunner for F
where
    F: Fn(&str, &[&str]) -> Result<String, AppError>,
{
    fn run(&self, command: &str, args: &[&str]) -> Result<String, AppError> {
        self(command, args)
    }
}

/// Render a command line for messages and logs.
pub fn command_line(command: &str, args: &[&str]) -> String {
    if args.is_empty() { command.to_string() } else { format!("{} {}", command, args.join(" ")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_runners() {
        let runner = |command: &str, args: &[&str]| -> Result<String, AppError> {
            Ok(command_line(command, args))
        };
        assert_eq!(runner.run("kubectl", &["apply", "-f", "x"]).unwrap(), "kubectl apply -f x");
    }

    #[test]
    fn command_line_without_args() {
        assert_eq!(command_line("mvn", &[]), "mvn");
    }
}
