//! Lookup table dump.

use crcfold::CrcTable;

const PER_LINE: usize = 8;

pub fn run(polynomial: u32) {
    let table = CrcTable::shared(polynomial);
    for row in table.entries().chunks(PER_LINE) {
        let line: Vec<String> = row.iter().map(|entry| format!("{entry:#010x}")).collect();
        println!("{}", line.join(" "));
    }
}
