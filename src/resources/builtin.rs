//! Lexical resources compiled into the binary.
//!
//! The stopword list is the standard English list. The lemma tables cover
//! irregular plurals plus a core noun vocabulary. Polarity valences follow
//! the usual `[-4, 4]` human-rated scale and subjectivity values the `[0, 1]`
//! adjective scale. A resource bundle file can replace any of these.

pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
    "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Irregular noun plurals and their base forms.
pub const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("stimuli", "stimulus"),
    ("alumni", "alumnus"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("appendices", "appendix"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("thieves", "thief"),
];

/// Base-form nouns the suffix rules may reduce to.
pub const NOUNS: &[&str] = &[
    "account", "actor", "address", "advice", "age", "agent", "air", "amount", "animal",
    "answer", "app", "apple", "area", "arm", "art", "article", "baby", "bag", "ball", "bank",
    "battery", "beach", "bed", "bill", "bird", "book", "boss", "bottle", "box", "boy",
    "brand", "bread", "bug", "building", "bus", "business", "button", "cake", "camera",
    "car", "card", "case", "cat", "chair", "chance", "change", "channel", "character",
    "chef", "child", "church", "city", "class", "client", "coffee", "color", "company",
    "computer", "cost", "country", "crisis", "customer", "data", "day", "deal", "delay",
    "design", "device", "dinner", "dish", "doctor", "dog", "door", "dress", "driver", "episode",
    "error", "event", "experience", "eye", "face", "fact", "family", "fan", "feature",
    "fee", "feeling", "film", "fish", "flight", "flower", "food", "foot", "friend", "fruit",
    "game", "garden", "gift", "girl", "glass", "goal", "goose", "group", "guest", "guy",
    "hand", "head", "holiday", "home", "hope", "hotel", "hour", "house", "idea", "issue",
    "item", "job", "joke", "key", "kid", "kitchen", "lady", "language", "laptop", "lesson",
    "letter", "life", "light", "line", "list", "loss", "lunch", "machine", "man", "manager",
    "match", "meal", "meeting", "member", "memory", "menu", "message", "minute", "mistake",
    "moment", "money", "month", "mouse", "movie", "music", "name", "night", "number",
    "office", "order", "owner", "package", "page", "parent", "park", "part", "party",
    "person", "phone", "photo", "picture", "place", "plan", "plane", "player", "point",
    "policy", "price", "problem", "process", "product", "project", "question", "reason",
    "refund", "restaurant", "result", "review", "room", "rule", "school", "screen", "seat",
    "service", "shirt", "shoe", "shop", "show", "site", "size", "smile", "song", "sound",
    "staff", "star", "step", "store", "story", "student", "study", "system", "table",
    "taste", "teacher", "team", "thing", "ticket", "time", "tooth", "tour", "town", "toy",
    "train", "trip", "update", "user", "vacation", "version", "video", "view", "visit",
    "voice", "waiter", "wall", "watch", "water", "way", "website", "week", "wife", "window",
    "wish", "woman", "word", "work", "worker", "world", "year",
];

/// Word valences on the `[-4, 4]` scale.
pub const POLARITY: &[(&str, f64)] = &[
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("accept", 1.6),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("agree", 1.5),
    ("alarm", -1.4),
    ("alone", -1.0),
    ("amazing", 2.8),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoy", -1.9),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("appreciate", 1.7),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bless", 1.8),
    ("bliss", 2.7),
    ("bored", -1.1),
    ("boring", -1.3),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("broken", -2.1),
    ("calm", 1.3),
    ("care", 2.2),
    ("charming", 2.8),
    ("cheap", -0.5),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("complain", -1.5),
    ("confident", 2.2),
    ("confused", -1.3),
    ("cool", 1.3),
    ("crap", -1.6),
    ("crazy", -1.4),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("cute", 2.0),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dead", -3.3),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("despair", -1.3),
    ("destroy", -2.7),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("easy", 1.9),
    ("effective", 2.1),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fair", 1.3),
    ("fake", -2.1),
    ("fantastic", 2.6),
    ("fear", -2.2),
    ("fine", 0.8),
    ("fool", -1.9),
    ("fortunate", 1.9),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("fun", 2.3),
    ("funny", 1.9),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("grief", -2.2),
    ("gross", -2.1),
    ("guilty", -1.8),
    ("happy", 2.7),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ideal", 2.4),
    ("idiot", -2.3),
    ("ignore", -1.5),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("inspire", 2.3),
    ("interesting", 1.7),
    ("joke", 1.2),
    ("joy", 2.8),
    ("kind", 2.4),
    ("kill", -3.7),
    ("lame", -1.8),
    ("laugh", 2.6),
    ("lazy", -1.5),
    ("like", 1.5),
    ("likes", 2.0),
    ("lonely", -1.5),
    ("lose", -1.6),
    ("loser", -2.4),
    ("loss", -1.3),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("lovely", 2.8),
    ("lucky", 1.8),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("nightmare", -2.4),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("poor", -2.1),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("regret", -1.8),
    ("relax", 1.9),
    ("reliable", 1.7),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("sad", -2.1),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("scared", -1.9),
    ("shame", -2.1),
    ("sick", -2.3),
    ("silly", 0.1),
    ("slow", -0.8),
    ("smart", 1.7),
    ("smile", 1.5),
    ("sorry", -0.3),
    ("splendid", 2.8),
    ("stupid", -2.4),
    ("success", 2.7),
    ("suck", -1.5),
    ("sucks", -1.5),
    ("super", 2.9),
    ("support", 1.7),
    ("sweet", 2.0),
    ("terrible", -2.1),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("trust", 2.3),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useful", 1.9),
    ("useless", -1.8),
    ("waste", -1.8),
    ("weak", -1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yay", 2.4),
];

/// Intensifiers raise the magnitude of the following word, dampeners lower it.
pub const BOOSTER_INCREASE: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more",
    "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
    "very",
];

pub const BOOSTER_DECREASE: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never",
    "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
    "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// `(word, subjectivity, intensity)`; intensity other than `1.0` marks a modifier.
pub const SUBJECTIVITY: &[(&str, f64, f64)] = &[
    ("absolutely", 0.9, 1.8),
    ("amazing", 0.9, 1.0),
    ("angry", 1.0, 1.0),
    ("annoying", 0.9, 1.0),
    ("awesome", 1.0, 1.0),
    ("awful", 1.0, 1.0),
    ("bad", 0.667, 1.0),
    ("beautiful", 1.0, 1.0),
    ("best", 0.3, 1.0),
    ("better", 0.5, 1.0),
    ("boring", 1.0, 1.0),
    ("brilliant", 1.0, 1.0),
    ("broken", 0.4, 1.0),
    ("cheap", 0.7, 1.0),
    ("clean", 0.683, 1.0),
    ("clever", 0.5, 1.0),
    ("comfortable", 0.6, 1.0),
    ("cool", 0.65, 1.0),
    ("crazy", 0.9, 1.0),
    ("cute", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("difficult", 1.0, 1.0),
    ("dirty", 0.8, 1.0),
    ("disappointing", 0.7, 1.0),
    ("disgusting", 1.0, 1.0),
    ("dumb", 0.5, 1.0),
    ("easy", 0.833, 1.0),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.8, 1.0),
    ("extremely", 1.0, 1.5),
    ("fair", 0.9, 1.0),
    ("fake", 1.0, 1.0),
    ("fantastic", 0.9, 1.0),
    ("fine", 0.5, 1.0),
    ("free", 0.8, 1.0),
    ("fresh", 0.5, 1.0),
    ("friendly", 0.5, 1.0),
    ("fun", 0.2, 1.0),
    ("funny", 1.0, 1.0),
    ("glad", 1.0, 1.0),
    ("good", 0.6, 1.0),
    ("gorgeous", 1.0, 1.0),
    ("great", 0.75, 1.0),
    ("happy", 1.0, 1.0),
    ("hard", 0.542, 1.0),
    ("hate", 0.9, 1.0),
    ("helpful", 0.0, 1.0),
    ("honest", 0.9, 1.0),
    ("horrible", 1.0, 1.0),
    ("ideal", 0.9, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredibly", 0.9, 1.4),
    ("interesting", 0.5, 1.0),
    ("lazy", 1.0, 1.0),
    ("lonely", 1.0, 1.0),
    ("love", 0.6, 1.0),
    ("lovely", 0.75, 1.0),
    ("lucky", 1.0, 1.0),
    ("mad", 1.0, 1.0),
    ("miserable", 1.0, 1.0),
    ("nasty", 1.0, 1.0),
    ("nice", 1.0, 1.0),
    ("outstanding", 0.75, 1.0),
    ("painful", 0.9, 1.0),
    ("pathetic", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.733, 1.0),
    ("poor", 0.6, 1.0),
    ("pretty", 1.0, 1.0),
    ("proud", 1.0, 1.0),
    ("quite", 1.0, 1.1),
    ("really", 0.2, 1.2),
    ("rude", 0.7, 1.0),
    ("sad", 1.0, 1.0),
    ("safe", 0.5, 1.0),
    ("silly", 0.5, 1.0),
    ("slightly", 0.4, 0.8),
    ("slow", 0.4, 1.0),
    ("smart", 0.643, 1.0),
    ("somewhat", 0.5, 0.9),
    ("sorry", 1.0, 1.0),
    ("strange", 0.15, 1.0),
    ("stupid", 1.0, 1.0),
    ("super", 0.667, 1.0),
    ("sweet", 0.65, 1.0),
    ("terrible", 1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("totally", 0.75, 1.5),
    ("ugly", 1.0, 1.0),
    ("unfair", 0.9, 1.0),
    ("unhappy", 0.9, 1.0),
    ("useful", 0.0, 1.0),
    ("useless", 0.2, 1.0),
    ("very", 0.3, 1.3),
    ("weak", 0.375, 1.0),
    ("weird", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worse", 0.6, 1.0),
    ("worst", 1.0, 1.0),
    ("wrong", 0.9, 1.0),
];
