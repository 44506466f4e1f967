/// Per-cell state, one flag per bit. Only the lower three bits are used.
pub type WalledCell = u8;

/// wall between this cell and the one below it
pub const BOTTOM_WALL: u8 = 0;
/// wall between this cell and the one to its right
pub const RIGHT_WALL: u8 = 1;
pub const VISITED: u8 = 2;

/// Both owned walls standing, not visited.
pub const FRESH_CELL: WalledCell = (1 << BOTTOM_WALL) | (1 << RIGHT_WALL);

#[inline(always)]
pub fn get_bit(n: WalledCell, k: u8) -> bool {
    (n >> k) & 1 == 1
}

#[inline(always)]
pub fn set_bit(n: WalledCell, k: u8) -> WalledCell {
    n | (1 << k)
}

#[inline(always)]
pub fn unset_bit(n: WalledCell, k: u8) -> WalledCell {
    n & !(1 << k)
}
