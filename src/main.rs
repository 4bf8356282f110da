fn main() {
    kn_workflow::app::cli::run();
}
