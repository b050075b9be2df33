use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency English words, upper case.
pub const COMMON_WORDS: &[&str] = &[
    "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I", "IT", "FOR", "NOT", "ON",
    "WITH", "HE", "AS", "YOU", "DO", "AT", "THIS", "BUT", "HIS", "BY", "FROM", "THEY", "WE",
    "SAY", "HER", "SHE", "OR", "AN", "WILL", "MY", "ONE", "ALL", "WOULD", "THERE", "THEIR",
    "WHAT", "CAN", "OUT", "UP", "GET", "GO", "COME", "KNOW", "TIME", "TAKE", "THEM", "SEE",
    "HIM", "YEAR", "SO", "THINK", "WHEN", "WHICH", "MAKE", "THAN", "LOOK", "WAY", "BEEN",
    "CALL", "WHO", "OIL", "ITS", "NOW", "FIND", "LONG", "DOWN", "DAY", "DID", "COULD", "OVER",
    "NEW", "WORK", "LAST", "WANT", "ALSO", "PEOPLE", "GIVE", "USE", "WATER", "SAID", "EACH",
    "IF", "MAN", "LIFE", "WRITE", "RIGHT", "TOO", "ANY", "SAME", "THREE", "HIGH", "HAND",
    "THING", "PLACE", "OLD", "FOLLOW", "CAME", "GOOD", "SENTENCE", "SET", "EVERY", "ANSWER",
    "SCHOOL", "CHANGE", "PLAY", "SPELL", "AIR", "AWAY", "ANIMAL", "HOUSE", "POINT", "PAGE",
    "LETTER", "MOTHER", "WORLD", "STILL", "LEARN", "PLANT", "COVER", "FOOD", "SUN", "FOUR",
    "BETWEEN", "STATE", "KEEP", "EYE", "NEVER", "LET", "THOUGHT", "CITY", "TREE", "GREAT",
    "WHERE", "HELP", "THROUGH", "MUCH", "BEFORE", "LINE", "MEAN", "TELL", "BOY", "SHOW",
    "AROUND", "FORM", "SMALL", "PUT", "END", "WHY", "ASKED", "WENT", "MEN", "READ", "NEED",
    "LAND", "DIFFERENT", "HOME", "MOVE", "TRY", "KIND", "PICTURE", "AGAIN", "OFF", "FOUND",
    "STUDY", "SHOULD", "AMERICA", "NEAR", "ADD", "OWN", "BELOW", "COUNTRY", "FATHER", "START",
    "EARTH", "LIGHT", "HEAD", "UNDER", "STORY", "SAW", "LEFT", "DONT", "FEW", "WHILE", "ALONG",
    "MIGHT", "CLOSE", "SOMETHING", "SEEM", "NEXT", "HARD", "OPEN", "EXAMPLE", "BEGIN",
    "ALWAYS", "THOSE", "BOTH", "PAPER", "TOGETHER", "GOT", "GROUP", "OFTEN", "RUN",
    "IMPORTANT", "UNTIL", "CHILDREN", "SIDE", "FEET", "CAR", "MILE", "NIGHT", "WALK", "WHITE",
    "SEA", "BEGAN", "GROW", "TOOK", "RIVER", "CARRY", "ONCE", "BOOK", "HEAR", "STOP",
    "WITHOUT", "SECOND", "LATER", "MISS", "IDEA", "ENOUGH", "EAT", "FACE", "WATCH", "FAR",
    "INDIAN", "REAL", "ALMOST", "ABOVE", "GIRL", "SOMETIMES", "MOUNTAIN", "CUT", "YOUNG",
    "TALK", "SOON", "LIST", "SONG", "BEING", "LEAVE", "FAMILY", "BODY", "MUSIC", "COLOR",
    "STAND", "QUESTIONS", "FISH", "AREA", "MARK", "DOG", "HORSE", "BIRDS", "PROBLEM",
    "COMPLETE", "ROOM", "KNEW", "SINCE", "EVER", "PIECE", "TOLD", "USUALLY", "DIDNT",
    "FRIENDS", "EASY", "HEARD", "ORDER", "RED", "DOOR", "SURE", "BECOME", "TOP", "SHIP",
    "ACROSS", "TODAY", "DURING", "SHORT", "BETTER", "BEST", "HOWEVER", "LOW", "HOURS", "BLACK",
    "PRODUCTS", "HAPPENED", "WHOLE", "MEASURE", "REMEMBER", "EARLY", "WAVES", "REACHED",
    "LISTEN", "WIND", "ROCK", "SPACE", "COVERED", "FAST", "SEVERAL", "HOLD", "HIMSELF",
    "TOWARD", "FIVE", "STEP", "MORNING", "PASSED", "VOWEL", "TRUE", "HUNDRED", "AGAINST",
    "PATTERN", "NUMERAL", "TABLE", "NORTH", "SLOWLY", "MONEY", "MAP", "FARM", "PULLED", "DRAW",
    "VOICE", "SEEN", "COLD", "CRIED", "PLAN", "NOTICE", "SOUTH", "SING", "WAR", "GROUND",
    "FALL", "KING", "TOWN", "ILL", "UNIT", "FIGURE", "SYSTEM", "PROGRAM", "COMPUTER", "DATA",
    "SECURITY", "CODE", "MESSAGE", "TEXT", "CIPHER", "KEY", "ENCRYPT", "DECRYPT", "ATTACK",
    "ALGORITHM", "METHOD", "PROCESS", "RESULT", "TEST", "QUESTION", "POWER", "CANNOT", "ABLE",
    "SIX", "SIZE", "DARK", "BALL", "MATERIAL", "SPECIAL", "HEAVY", "FINE", "PAIR", "CIRCLE",
    "INCLUDE", "BUILT", "NOTHING", "COURSE", "STAY", "WHEEL", "FULL", "FORCE", "BLUE",
    "OBJECT", "DECIDE", "SURFACE", "DEEP", "MOON", "ISLAND", "FOOT", "YET", "BUSY", "RECORD",
    "BOAT", "COMMON", "GOLD", "POSSIBLE", "PLANE", "AGE", "DRY", "WONDER", "LAUGH", "THOUSAND",
    "AGO", "RAN", "CHECK", "GAME", "SHAPE", "YES", "HOT", "BROUGHT", "HEAT", "SNOW", "BED",
    "BRING", "SIT", "PERHAPS", "FILL", "EAST", "WEIGHT", "LANGUAGE", "AMONG", "QUICK", "BROWN",
    "FOX", "JUMPS", "LAZY",
];

pub static WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_WORDS.iter().copied().collect());

/// Longest entry in the table bounds every scan window.
pub static LONGEST_WORD: LazyLock<usize> =
    LazyLock::new(|| COMMON_WORDS.iter().map(|w| w.len()).max().unwrap_or(0));
