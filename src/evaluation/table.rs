use super::colex;
use super::strength::Strength;
use crate::RankValue;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::error::Error;
use rand::Rng;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

/// how many distinct five-card hands there are
pub const N_HANDS: usize = 2_598_960;
/// how many equivalence classes they collapse into
pub const N_CLASSES: usize = 7_462;

/// Precomputed rank of every five-card hand, indexed by colex position.
///
/// Values are dense class indices on [1, 7462] where 1 is a royal
/// flush and 7462 is 7-5-4-3-2 offsuit, so a lower value always means
/// a stronger hand and equivalent hands share a value. the table is
/// grown once from the bitwise Evaluator and thereafter costs a single
/// array load per lookup.
pub struct RankTable {
    ranks: Vec<u16>,
}

impl RankTable {
    /// enumerate, score, and densely renumber all five-card hands
    pub fn grow() -> Self {
        log::info!("{:<32}{:<32}", "growing rank table", format!("{} hands", N_HANDS));
        let keys = HandIterator::from((5, Hand::empty()))
            .map(Strength::from)
            .map(u32::from)
            .collect::<Vec<u32>>();
        assert!(keys.len() == N_HANDS);
        let mut order = keys.clone();
        order.sort_unstable();
        order.dedup();
        assert!(order.len() == N_CLASSES);
        let ranks = keys
            .iter()
            .map(|key| order.binary_search(key).expect("key came from order"))
            .map(|position| (N_CLASSES - position) as u16)
            .collect::<Vec<u16>>();
        Self { ranks }
    }

    /// rank of a five-card hand. lower is stronger.
    pub fn rank(&self, hand: Hand) -> RankValue {
        let index = colex::index(hand);
        assert!(index < self.ranks.len(), "rank table corrupted");
        self.ranks[index]
    }

    /// spot-check the table against the bitwise Evaluator: a sample of
    /// random five-card matchups must order identically both ways.
    pub fn verify(&self, samples: usize, rng: &mut impl Rng) -> Result<(), Error> {
        for _ in 0..samples {
            let mut deck = Deck::new();
            let a = deck.deal(5, rng);
            let b = Deck::new().deal(5, rng);
            let table = self.rank(a).cmp(&self.rank(b));
            let brute = u32::from(Strength::from(b)).cmp(&u32::from(Strength::from(a)));
            if table != brute {
                return Err(Error::InternalTableCorruption(format!(
                    "table and evaluator disagree on {} vs {}",
                    a, b
                )));
            }
        }
        Ok(())
    }

    /// write the table as little-endian u16 values in colex order
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        use byteorder::LittleEndian;
        use byteorder::WriteBytesExt;
        use std::fs::File;
        use std::io::BufWriter;
        log::info!("{:<32}{:<32}", "saving rank table", path.display());
        let ref mut file = BufWriter::new(File::create(path)?);
        for rank in self.ranks.iter() {
            file.write_u16::<LittleEndian>(*rank)?;
        }
        Ok(())
    }

    /// read a table back, refusing anything that is not exactly
    /// 2,598,960 little-endian u16 entries on [1, 7462]
    pub fn load(path: &Path) -> Result<Self, Error> {
        use byteorder::LittleEndian;
        use byteorder::ReadBytesExt;
        use std::fs::File;
        use std::io::BufReader;
        log::info!("{:<32}{:<32}", "loading rank table", path.display());
        let expected = (N_HANDS * 2) as u64;
        let observed = std::fs::metadata(path)?.len();
        if observed != expected {
            return Err(Error::InternalTableCorruption(format!(
                "expected {} bytes, found {}",
                expected, observed
            )));
        }
        let ref mut file = BufReader::new(File::open(path)?);
        let mut ranks = vec![0u16; N_HANDS];
        file.read_u16_into::<LittleEndian>(&mut ranks)?;
        if let Some(stray) = ranks
            .iter()
            .find(|rank| **rank == 0 || **rank as usize > N_CLASSES)
        {
            return Err(Error::InternalTableCorruption(format!(
                "rank {} outside [1, {}]",
                stray, N_CLASSES
            )));
        }
        Ok(Self { ranks })
    }

    pub fn path() -> PathBuf {
        std::env::current_dir().unwrap_or_default().join("ranks.bin")
    }
    pub fn done() -> bool {
        Self::path().exists()
    }

    /// the process-wide table. loads from disk when a generated file
    /// is present, otherwise grows in memory. a file that fails
    /// validation aborts rather than limping along with bad ranks.
    pub fn shared() -> &'static Self {
        static TABLE: OnceLock<RankTable> = OnceLock::new();
        TABLE.get_or_init(|| match Self::done() {
            true => Self::load(&Self::path()).expect("valid rank table on disk"),
            false => Self::grow(),
        })
    }
}
