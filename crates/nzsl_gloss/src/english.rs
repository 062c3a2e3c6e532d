//! Built-in English vocabulary for the lexicon tagger.
//!
//! Small closed lists of everyday words, biased towards signs that are common
//! in NZSL teaching material. Words outside these lists fall through to
//! suffix heuristics.

/// Common adjectives.
pub const ADJECTIVES: &[&str] = &[
    // Colours
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white",
    "grey", "gray",
    // Size and shape
    "big", "small", "little", "large", "tiny", "huge", "tall", "short", "long", "wide", "narrow",
    "round", "fat", "thin",
    // Feelings and states
    "happy", "sad", "angry", "tired", "hungry", "thirsty", "sick", "well", "scared", "excited",
    "bored", "lonely", "proud", "sorry", "busy", "ready", "deaf", "hard-of-hearing",
    // Qualities
    "good", "bad", "nice", "new", "old", "young", "hot", "cold", "warm", "cool", "fast", "slow",
    "easy", "difficult", "hard", "soft", "clean", "dirty", "cheap", "expensive", "rich", "poor",
    "quiet", "loud", "strong", "weak", "funny", "smart", "clever", "kind", "pretty", "ugly",
    "delicious", "favourite", "favorite", "important", "special", "different", "same", "full",
    "empty", "wet", "dry", "early", "late", "free", "safe", "sweet", "sour",
];

/// Common nouns.
pub const NOUNS: &[&str] = &[
    // People
    "person", "people", "man", "woman", "child", "children", "baby", "boy", "girl", "friend",
    "family", "mother", "mum", "father", "dad", "brother", "sister", "teacher", "student",
    "doctor", "nurse", "interpreter",
    // Animals
    "dog", "cat", "bird", "fish", "horse", "cow", "sheep", "pig", "kiwi",
    // Food and drink
    "apple", "banana", "bread", "milk", "water", "coffee", "tea", "food", "breakfast", "lunch",
    "dinner", "cake", "egg", "meat", "juice",
    // Places
    "house", "home", "school", "work", "shop", "church", "marae", "hospital", "park", "beach",
    "city", "town", "country", "room", "kitchen", "office", "library",
    // Things
    "car", "bus", "train", "bike", "plane", "book", "phone", "computer", "table", "chair",
    "door", "window", "bed", "ball", "game", "money", "bag", "shirt", "shoe", "hat", "video",
    "sign", "language", "name", "question", "story", "job", "holiday", "birthday", "party",
    "weather", "rain", "sun",
];

/// Personal pronouns and possessives.
pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "ours", "they", "them", "their", "theirs",
];

/// Articles and demonstratives.
pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each",
];

/// Common verbs, including auxiliaries.
pub const VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "can", "may", "might", "must", "shall", "go",
    "going", "went", "come", "coming", "eat", "eating", "drink", "see", "look", "like", "love",
    "want", "need", "know", "think", "sign", "signing", "learn", "learning", "play", "work",
    "walk", "run", "sleep", "help", "give", "make", "read", "write", "buy", "meet", "live",
    "understand", "finish", "start", "stop",
];

/// Suffixes that mark an adjective.
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish", "al", "ic"];

/// Suffixes that mark a noun.
pub const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ness", "ment", "ity", "ship", "hood"];
