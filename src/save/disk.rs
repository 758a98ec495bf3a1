use crate::cards::composition::Reduced;
use crate::cards::rank::Rank;
use crate::odds::cache::Cache;
use crate::odds::cache::Key;
use crate::odds::distribution::Distribution;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use byteorder::BE;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;

/// For types that can be written to and loaded from disk. Loading a
/// missing file yields the empty value; persistence is an optimization,
/// never a correctness requirement.
pub trait Disk: Sized + Default {
    /// Name of the entity, consistent with its file name.
    fn name() -> String;
    /// Write to disk.
    fn save(&self);
    /// Read from disk, or start empty.
    fn load() -> Self;
    /// Path to file on disk.
    fn path() -> String {
        format!(
            "{}/cache/{}.bin",
            std::env::current_dir()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            Self::name(),
        )
    }
    /// Check if file exists on disk.
    fn done() -> bool {
        std::fs::metadata(Self::path()).is_ok()
    }
    /// Magic bytes opening the binary file.
    fn header() -> &'static [u8] {
        b"ROBOJACK\n\0\x01"
    }
    /// Sentinel signaling end of binary file.
    fn footer() -> u16 {
        0xFFFF
    }
}

/// Fields per cache record: up-card, ten reduced counts, six masses.
const N_FIELDS: u16 = 17;

impl Disk for Cache {
    fn name() -> String {
        String::from("chances")
    }

    fn save(&self) {
        let ref path = Self::path();
        log::info!("{:<32}{:<32}", "saving      chances", path);
        std::fs::create_dir_all("cache").expect("create cache directory");
        let file = std::fs::File::create(path).expect("touch chances file");
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::header()).expect("header");
        for (key, distribution) in self.entries() {
            writer.write_u16::<BE>(N_FIELDS).expect("fields");
            writer.write_u8(u8::from(key.up)).expect("up card");
            for count in key.shoe.0 {
                writer.write_u8(count).expect("count");
            }
            for mass in distribution.masses() {
                writer.write_f64::<BE>(*mass).expect("mass");
            }
        }
        writer.write_u16::<BE>(Self::footer()).expect("footer");
    }

    fn load() -> Self {
        let ref path = Self::path();
        if !Self::done() {
            log::info!("{:<32}{:<32}", "starting    chances", "empty");
            return Self::default();
        }
        log::info!("{:<32}{:<32}", "loading     chances", path);
        let file = std::fs::File::open(path).expect("open chances file");
        let mut reader = BufReader::new(file);
        let ref mut magic = vec![0u8; Self::header().len()];
        reader.read_exact(magic).expect("read header");
        assert!(magic.as_slice() == Self::header(), "not a chances file: {}", path);
        let mut entries = vec![];
        loop {
            match reader.read_u16::<BE>().expect("read fields") {
                N_FIELDS => {
                    let up = Rank::from(reader.read_u8().expect("up card"));
                    let mut counts = [0u8; 10];
                    for count in counts.iter_mut() {
                        *count = reader.read_u8().expect("count");
                    }
                    let mut masses = [0f64; 6];
                    for mass in masses.iter_mut() {
                        *mass = reader.read_f64::<BE>().expect("mass");
                    }
                    let key = Key::from((up, Reduced(counts)));
                    entries.push((key, Distribution::from(masses)));
                }
                footer if footer == Self::footer() => break,
                n => panic!("unexpected number of fields: {}", n),
            }
        }
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::composition::Composition;
    use crate::cards::hand::Hand;
    use crate::odds::engine::distribution;

    #[test]
    fn record_shape_round_trips_through_bytes() {
        // exercise the record codec without touching the filesystem
        let shoe = Composition::full(1);
        let cache = Cache::default();
        let up = Hand::from(vec![Rank::King]);
        let before = distribution(&up, shoe, &cache);
        let (key, stored) = cache.entries().pop().expect("one entry");

        let mut bytes = vec![];
        bytes.write_u16::<BE>(N_FIELDS).unwrap();
        bytes.write_u8(u8::from(key.up)).unwrap();
        for count in key.shoe.0 {
            bytes.write_u8(count).unwrap();
        }
        for mass in stored.masses() {
            bytes.write_f64::<BE>(*mass).unwrap();
        }

        let mut reader = std::io::Cursor::new(bytes);
        assert!(reader.read_u16::<BE>().unwrap() == N_FIELDS);
        assert!(Rank::from(reader.read_u8().unwrap()) == Rank::King);
        let mut counts = [0u8; 10];
        for count in counts.iter_mut() {
            *count = reader.read_u8().unwrap();
        }
        assert!(Reduced(counts) == shoe.reduce());
        let mut masses = [0f64; 6];
        for mass in masses.iter_mut() {
            *mass = reader.read_f64::<BE>().unwrap();
        }
        assert!(Distribution::from(masses).identical(&before));
    }
}
