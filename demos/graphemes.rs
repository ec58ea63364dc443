use stemtrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    trie.insert(input.clone(), count);
    assert!(trie.contains(input.clone()));
    assert_eq!(trie.get(input.clone()), Some(&count));

    // Every grapheme prefix of the key is a branch, not a key
    let first = s.graphemes(true).take(1);
    assert!(trie.contains_prefix(first.clone()));
    assert!(trie.get(first).is_none());

    assert_eq!(trie.remove(input), Some(count));
    assert_eq!(trie.node_count(), 0);
}
