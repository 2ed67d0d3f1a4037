use blit_lib::demos::alpha_blend::AlphaBlend;

fn main() {
    blit_app::launch(|stage| stage.play::<AlphaBlend<_>>());
}
