use rand::{distributions::Alphanumeric, thread_rng, Rng};
use std::iter::FromIterator;
use stemtrie::trie::Trie;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random strings (char sequences)
    // composed of between 1 and 10 characters in
    // our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: Vec<char> = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        let len = entry.len();
        trie.insert(entry, len);
    }

    // iterate over the trie and confirm that all
    // keys are in our search collection. Keys come
    // back in sorted order.
    for pair in trie.iter() {
        assert!(searches.contains(&pair.key));
        println!(
            "key: {}, value: {:?}",
            String::from_iter(&pair.key),
            pair.value
        );
    }

    // Only the keys sharing the first key's initial
    // character
    let first = searches[0][0];
    println!("starting with {:?}", first);
    trie.walk([first], |key, value| {
        println!("key: {}, value: {}", String::from_iter(key), value);
    });
}
