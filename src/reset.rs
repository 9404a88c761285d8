/// Hands control back to the bootloader. Never returns.
pub trait Reset {
    fn reset(&mut self) -> !;
}
