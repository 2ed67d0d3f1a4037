use blit_lib::demos::color_key::ColorKey;

fn main() {
    blit_app::launch(|stage| stage.play::<ColorKey<_>>());
}
