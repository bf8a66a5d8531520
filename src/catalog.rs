//! Scavenger hunt prompts. One is drawn per round after shuffling.

pub const ITEM_CATALOG: [&str; 38] = [
    "Something red",
    "Something that starts with 'A'",
    "Something round",
    "Something with more than one color",
    "An object you use every day",
    "A book or magazine",
    "An object that reminds you of nature",
    "Something that shines",
    "A wooden object",
    "Something with a known brand logo",
    "A fashion accessory",
    "An object with a written message or quote",
    "Something green",
    "An object that was a gift from someone",
    "Something made of plastic",
    "A technology-related object",
    "Something used in the kitchen",
    "Something used in the bathroom",
    "Something that makes noise",
    "An object with numbers on it",
    "Something soft to touch",
    "An object that opens and closes",
    "Something yellow",
    "An object with a pattern",
    "Something that holds water",
    "An object used for writing",
    "Something that smells good",
    "An object with buttons",
    "Something square shaped",
    "An object from another country",
    "Something metallic",
    "An object used for cleaning",
    "Something transparent",
    "An object that tells time",
    "Something that folds",
    "An object with wheels",
    "Something that reflects light",
    "An object used for entertainment",
];

/// Owned copy of the catalog, in catalog order
pub fn items() -> Vec<String> {
    ITEM_CATALOG.iter().map(|s| s.to_string()).collect()
}
