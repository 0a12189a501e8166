#![no_main]
use libfuzzer_sys::fuzz_target;
use sparsegrid::SparseMatrix;
use std::collections::BTreeMap;

// Each 3 byte chunk is one write: row, column, value. Small coordinates
// keep collisions frequent; value 0 is the default.
fuzz_target!(|data: &[u8]| {
    let mut matrix = SparseMatrix::new(0u8);
    let mut model = BTreeMap::new();
    for op in data.chunks_exact(3) {
        let pos = (i64::from(op[0] % 8) - 4, i64::from(op[1] % 8) - 4);
        let val = op[2] % 4;
        if op[2] & 0x80 == 0 {
            matrix.set(pos, val);
        } else {
            matrix.row(pos.0).col(pos.1).assign(val);
        }
        if val == 0 {
            model.remove(&pos);
        } else {
            model.insert(pos, val);
        }
        assert_eq!(matrix.get(pos), &val);
    }
    assert_eq!(matrix.len(), model.len());
    assert!(matrix.cells().all(|(_, _, v)| *v != 0));
    assert!(matrix
        .cells()
        .map(|(r, c, v)| ((r, c), *v))
        .eq(model.into_iter()));
    if let Some((start, end)) = matrix.bounds() {
        if let Ok(range) = matrix.range(start, end) {
            assert_eq!(range.used_cells().count(), matrix.len());
        }
    }
});
