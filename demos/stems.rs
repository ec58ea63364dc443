use stemtrie::trie::TrieString;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .init();

    let mut trie = TrieString::new();
    for (word, value) in [
        ("car", 3),
        ("carpet", 4),
        ("cart", 5),
        ("cartridge", 9),
        ("probe", 10),
        ("problem", 11),
        ("probability", 12),
        ("foo", 1),
        ("food", 2),
    ] {
        trie.insert(word.chars(), value);
    }
    print!("{}", trie);

    for stem in trie.stems::<_, String>("".chars(), 3) {
        println!("{:>6} covers {} keys", stem.key, stem.count);
    }

    let suggestions: Vec<String> = trie.suggest("car".chars());
    println!("car -> {:?}", suggestions);

    trie.remove("cartridge".chars());
    trie.remove("probe".chars());
    print!("{}", trie);
}
