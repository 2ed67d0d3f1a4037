use blit_lib::demos::animation::Animated;

fn main() {
    blit_app::launch(|stage| stage.play::<Animated<_>>());
}
