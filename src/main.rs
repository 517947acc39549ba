fn main() {
    promptgen::app::cli::run();
}
