fn main() {
    polyglot_frontend::start();
}
