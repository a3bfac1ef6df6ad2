use ashy_derive::ashy_error;

#[ashy_error]
pub enum BrushError {
    #[error("Brush config error: {message}")]
    Config { message: String, context: Option<String> },
}

fn main() {}
