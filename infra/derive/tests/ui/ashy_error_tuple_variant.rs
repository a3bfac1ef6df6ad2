use ashy_derive::ashy_error;

#[ashy_error]
pub enum BrushError {
    Io(std::io::Error),
}

fn main() {}
