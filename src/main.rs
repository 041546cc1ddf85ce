use ticket_list_pwa::components::Top;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<Top>();
}
