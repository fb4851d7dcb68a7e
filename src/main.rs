fn main() {
    prompteng::app::cli::run();
}
