fn main() {
    nahual::app::cli::run();
}
