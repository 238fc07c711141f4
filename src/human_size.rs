const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Whole units only: `512 bytes`, `63 KiB`, `23 MiB`.
pub fn human_size(bytes: u64) -> String {
    match bytes {
        b if b < KIB => format!("{b} bytes"),
        b if b < MIB => format!("{} KiB", b / KIB),
        b if b < GIB => format!("{} MiB", b / MIB),
        b => format!("{} GiB", b / GIB),
    }
}
