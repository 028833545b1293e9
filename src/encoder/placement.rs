/// Data module placement along the zig-zag path
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, QrResult};
use crate::models::{MaskPattern, Symbol};

/// Place `data` into every unused module, XORed with `mask`.
///
/// Two-column strips are walked right to left, alternating upward and
/// downward, skipping the vertical timing column. Fails if bits are left
/// over or modules remain unassigned.
pub fn place_data(symbol: &mut Symbol, data: &BitBuffer, mask: MaskPattern) -> QrResult<()> {
    let size = symbol.symbol_size();
    let mut bits = data.iter();
    let mut placed = 0usize;

    let mut upward = true;
    let mut col = size as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for x in [col as usize, col as usize - 1] {
                if symbol.is_used(x, row) {
                    continue;
                }
                let Some(bit) = bits.next() else {
                    continue;
                };
                symbol.set(x, row, bit ^ mask.is_masked(row, x));
                placed += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }

    if placed != data.len() {
        return Err(QrError::InternalConsistency(format!(
            "placed {} of {} data bits",
            placed,
            data.len()
        )));
    }
    let unused = symbol.num_unused_modules();
    if unused != 0 {
        return Err(QrError::InternalConsistency(format!(
            "{} modules left unused after data placement",
            unused
        )));
    }
    Ok(())
}
