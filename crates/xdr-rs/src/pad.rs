/// Number of filler bytes needed after a payload of `len` bytes to bring the
/// total to a multiple of 4.
pub fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}
