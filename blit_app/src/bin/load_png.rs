use blit_lib::demos::load_png::LoadPng;

fn main() {
    blit_app::launch(|stage| stage.play::<LoadPng<_>>());
}
