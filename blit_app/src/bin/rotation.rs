use blit_lib::demos::rotation::Rotation;

fn main() {
    blit_app::launch(|stage| stage.play::<Rotation<_>>());
}
