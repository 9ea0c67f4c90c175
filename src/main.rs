fn main() {
    blinkpipe::app::startup::startup();
}
