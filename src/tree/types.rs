/// Running counts of what a generation pass created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub dirs: usize,
    pub files: usize,
    pub bytes: u64,
}

impl Tally {
    pub fn add(
        &mut self,
        other: Tally,
    ) {
        self.dirs += other.dirs;
        self.files += other.files;
        self.bytes += other.bytes;
    }
}
