use blit_lib::demos::ttf::Ttf;

fn main() {
    blit_app::launch(|stage| stage.play::<Ttf<_>>());
}
