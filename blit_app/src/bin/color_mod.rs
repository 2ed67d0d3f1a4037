use blit_lib::demos::color_mod::ColorMod;

fn main() {
    blit_app::launch(|stage| stage.play::<ColorMod<_>>());
}
