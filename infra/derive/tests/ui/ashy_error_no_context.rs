use ashy_derive::ashy_error;

#[ashy_error]
pub enum BrushError {
    #[error("Brush IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
