use blit_lib::demos::load_texture::LoadTexture;

fn main() {
    blit_app::launch(|stage| stage.play::<LoadTexture<_>>());
}
