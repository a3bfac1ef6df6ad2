use ashy_derive::ashy_error;

#[ashy_error]
pub struct BrushError {
    pub message: String,
}

fn main() {}
