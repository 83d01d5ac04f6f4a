fn main() {
    runbook_gen::app::cli::run();
}
