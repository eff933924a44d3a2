//! `simulate`: a non-normative, pedagogical view of how a buffer would be
//! compressed by each of the three strategies, with tree structure suitable
//! for rendering. Nothing here participates in `compress`/`decompress`.

use crate::huffman;
use serde::Serialize;

/// A recursive `{name, value, children?}` record for tree visualization.
/// Leaves name themselves by printable glyph (ASCII 32..126) or a hex
/// escape otherwise; internal nodes carry no name.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub name: Option<String>,
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

fn leaf_name(byte: u8) -> String {
    if (32..=126).contains(&byte) {
        (byte as char).to_string()
    } else {
        format!("\\x{byte:02x}")
    }
}

fn describe(tree: &huffman::Tree, idx: u32) -> TreeNode {
    let node = &tree.nodes[idx as usize];
    if node.is_leaf() {
        TreeNode { name: Some(leaf_name(node.byte)), value: node.freq(), children: None }
    } else {
        TreeNode {
            name: None,
            value: node.freq(),
            children: Some(vec![describe(tree, node.left), describe(tree, node.right)]),
        }
    }
}

/// Build a visualization tree for `input` as Huffman would encode it directly.
fn tree_for(input: &[u8]) -> Option<TreeNode> {
    if input.is_empty() {
        return None;
    }
    let freqs = huffman::ordered_frequencies(input);
    let tree = huffman::build_tree(&freqs);
    Some(describe(&tree, tree.root))
}

/// The three strategies `simulate` considers, matching the container's flag
/// semantics plus a nameable "none beats compression" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Raw,
    HuffmanOnly,
    Hybrid,
}

/// Everything `simulate` reports about one input buffer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub original_size: usize,
    pub huffman_only_size: usize,
    pub lzw_only_size: usize,
    pub hybrid_size: usize,
    pub mode: Mode,
    /// Tree for Huffman applied directly to the input.
    pub huffman_only_tree: Option<TreeNode>,
    /// Tree for Huffman applied to the LZW-encoded input.
    pub hybrid_tree: Option<TreeNode>,
    /// The raw LZW code sequence (pre byte-packing), for inspection.
    pub lzw_codes: Vec<u16>,
}

impl Report {
    /// The tree corresponding to whichever mode was actually selected.
    /// `Mode::Raw` has no tree to show.
    pub fn selected_tree(&self) -> Option<&TreeNode> {
        match self.mode {
            Mode::Raw => None,
            Mode::HuffmanOnly => self.huffman_only_tree.as_ref(),
            Mode::Hybrid => self.hybrid_tree.as_ref(),
        }
    }
}

/// Simulate all three strategies against `input` and report their sizes,
/// trees, and the true minimum (not the container's greedy selector, see
/// the crate-level design notes on why these two intentionally differ).
pub fn simulate(input: &[u8]) -> Report {
    let original_size = input.len();

    let lzw_codes = crate::lzw::encode_codes(input);
    let lzw_bytes = crate::lzw::encode(input);
    let lzw_only_size = lzw_bytes.len();

    let huffman_only_size = huffman::encode(input).len();
    let hybrid_size = huffman::encode(&lzw_bytes).len();

    let mode = if original_size <= huffman_only_size && original_size <= hybrid_size {
        Mode::Raw
    } else if huffman_only_size <= hybrid_size {
        Mode::HuffmanOnly
    } else {
        Mode::Hybrid
    };
    log::debug!(
        "simulate: raw={original_size} huffman_only={huffman_only_size} hybrid={hybrid_size} -> {mode:?}"
    );

    Report {
        original_size,
        huffman_only_size,
        lzw_only_size,
        hybrid_size,
        mode,
        huffman_only_tree: tree_for(input),
        hybrid_tree: tree_for(&lzw_bytes),
        lzw_codes,
    }
}
