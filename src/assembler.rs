use crate::constants::SPACER;
use crate::design::PlasmidDesign;
use crate::diagnostics::{DiagnosticKind, Diagnostics, WithDiagnostics};
use crate::enzyme::Enzyme;
use crate::marker::{insert_markers, MarkerTable};
use crate::mcs::build_mcs;
use crate::mutate::{contains_motif, mutate_motif};
use crate::ori::{find_ori_with, OriParams, OriWindow};
use crate::replication::build_replication_core;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Ori,
    ReplicationCore,
    Spacer,
    Marker(String),
    Mcs,
}

impl BlockKind {
    pub fn label(&self) -> String {
        match self {
            BlockKind::Ori => "ori".into(),
            BlockKind::ReplicationCore => "replication core".into(),
            BlockKind::Spacer => "spacer".into(),
            BlockKind::Marker(name) => format!("marker {}", name),
            BlockKind::Mcs => "MCS".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub sequence: Vec<u8>,
}

impl Block {
    fn new(kind: BlockKind, sequence: Vec<u8>) -> Block {
        Block { kind, sequence }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plasmid {
    /// Final sequence, after requested restriction sites have been removed
    pub sequence: Vec<u8>,
    /// Window of the donor sequence used as the ori block
    pub ori: OriWindow,
    /// Blocks of the assembly prior to site removal, in assembly order
    pub blocks: Vec<Block>,
    /// Enzymes whose sites were found and mutated, in the order processed
    pub removed_sites: Vec<String>,
}

impl Plasmid {
    /// The assembled sequence prior to site removal.
    pub fn assembled(&self) -> Vec<u8> {
        concatenate(&self.blocks)
    }
}

fn concatenate(blocks: &[Block]) -> Vec<u8> {
    let mut sequence = Vec::with_capacity(blocks.iter().map(|b| b.sequence.len()).sum());
    for block in blocks {
        sequence.extend_from_slice(&block.sequence);
    }

    sequence
}

fn assemble_blocks(
    donor: &[u8],
    design: &PlasmidDesign,
    markers: &MarkerTable,
    params: OriParams,
    diagnostics: &mut Diagnostics,
) -> (OriWindow, Vec<Block>) {
    let ori = find_ori_with(donor, params);
    let mut blocks = vec![
        Block::new(BlockKind::Ori, ori.slice(donor).to_owned()),
        Block::new(BlockKind::ReplicationCore, build_replication_core()),
    ];

    for marker in insert_markers(&design.antibiotics, markers, diagnostics) {
        blocks.push(Block::new(BlockKind::Spacer, marker.spacer.to_owned()));
        blocks.push(Block::new(BlockKind::Marker(marker.name), marker.marker));
    }

    let mcs = build_mcs(&design.enzymes, diagnostics);
    if !mcs.is_empty() {
        blocks.push(Block::new(BlockKind::Spacer, SPACER.to_owned()));
        blocks.push(Block::new(BlockKind::Mcs, mcs));
    }

    (ori, blocks)
}

/// Apply one mutation pass per requested enzyme, each on the output of the
/// previous pass. Returns the names of enzymes whose sites were mutated.
fn remove_sites<S: AsRef<str>>(
    sequence: &mut Vec<u8>,
    remove: &[S],
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let mut removed = Vec::new();
    for name in remove {
        let name = name.as_ref();
        let enzyme = match Enzyme::get(name) {
            Some(enzyme) => enzyme,
            None => {
                diagnostics.push(DiagnosticKind::UnknownRemovalSite, name);
                continue;
            }
        };

        if contains_motif(sequence, enzyme.site) {
            *sequence = mutate_motif(sequence, enzyme.site);
            removed.push(name.to_owned());
        }
    }

    removed
}

/// Assemble a plasmid using the default ORI window and step.
pub fn build_plasmid<S: AsRef<str>>(
    donor: &[u8],
    design: &PlasmidDesign,
    markers: &MarkerTable,
    remove: &[S],
) -> WithDiagnostics<Plasmid> {
    build_plasmid_with(donor, design, markers, remove, OriParams::default())
}

/// Assemble ori block, replication core, markers and MCS (in that order), and
/// then remove the restriction sites listed in `remove`.
pub fn build_plasmid_with<S: AsRef<str>>(
    donor: &[u8],
    design: &PlasmidDesign,
    markers: &MarkerTable,
    remove: &[S],
    params: OriParams,
) -> WithDiagnostics<Plasmid> {
    let mut diagnostics = Diagnostics::new();
    let (ori, blocks) = assemble_blocks(donor, design, markers, params, &mut diagnostics);

    let mut sequence = concatenate(&blocks);
    let removed_sites = remove_sites(&mut sequence, remove, &mut diagnostics);

    let plasmid = Plasmid {
        sequence,
        ori,
        blocks,
        removed_sites,
    };

    WithDiagnostics::new(plasmid, diagnostics)
}
