//! Node and edge value types for the mechanism graph
//!
//! Nodes are typed entities (`gene:FH`, `pathway:NRF2_ARE`, ...) and edges
//! are directed causal/relational statements between them. All invariants
//! are enforced eagerly by the constructors: no node or edge observable in
//! a graph can violate them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, Result};

/// Inclusive bounds for edge confidence weights. Keeping weights strictly
/// inside (0, 1) keeps `-ln(weight)` finite and non-zero.
pub const MIN_WEIGHT: f64 = 0.01;
pub const MAX_WEIGHT: f64 = 0.99;

/// Entity type of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Gene,
    Protein,
    Metabolite,
    Complex,
    Process,
    State,
    Pathway,
    Phenotype,
    CellType,
    Compartment,
    Therapy,
}

impl NodeType {
    /// All valid node types
    pub const VALID_TYPES: &'static [&'static str] = &[
        "gene",
        "protein",
        "metabolite",
        "complex",
        "process",
        "state",
        "pathway",
        "phenotype",
        "cell_type",
        "compartment",
        "therapy",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Gene => "gene",
            NodeType::Protein => "protein",
            NodeType::Metabolite => "metabolite",
            NodeType::Complex => "complex",
            NodeType::Process => "process",
            NodeType::State => "state",
            NodeType::Pathway => "pathway",
            NodeType::Phenotype => "phenotype",
            NodeType::CellType => "cell_type",
            NodeType::Compartment => "compartment",
            NodeType::Therapy => "therapy",
        }
    }
}

impl FromStr for NodeType {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gene" => Ok(NodeType::Gene),
            "protein" => Ok(NodeType::Protein),
            "metabolite" => Ok(NodeType::Metabolite),
            "complex" => Ok(NodeType::Complex),
            "process" => Ok(NodeType::Process),
            "state" => Ok(NodeType::State),
            "pathway" => Ok(NodeType::Pathway),
            "phenotype" => Ok(NodeType::Phenotype),
            "cell_type" => Ok(NodeType::CellType),
            "compartment" => Ok(NodeType::Compartment),
            "therapy" => Ok(NodeType::Therapy),
            other => Err(MechError::Other(format!(
                "unknown node type: {} (expected: {})",
                other,
                Self::VALID_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relation type on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Causes,
    Enables,
    Prevents,
    Increases,
    Decreases,
    Activates,
    Inhibits,
    Stabilizes,
    Destabilizes,
    ConvertsTo,
    Accumulates,
    InhibitsActivityOf,
    Modifies,
    Binds,
    TranslocatesTo,
    AssociatesWith,
}

impl Predicate {
    /// All valid predicates
    pub const VALID_PREDICATES: &'static [&'static str] = &[
        "causes",
        "enables",
        "prevents",
        "increases",
        "decreases",
        "activates",
        "inhibits",
        "stabilizes",
        "destabilizes",
        "converts_to",
        "accumulates",
        "inhibits_activity_of",
        "modifies",
        "binds",
        "translocates_to",
        "associates_with",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Predicate::Causes => "causes",
            Predicate::Enables => "enables",
            Predicate::Prevents => "prevents",
            Predicate::Increases => "increases",
            Predicate::Decreases => "decreases",
            Predicate::Activates => "activates",
            Predicate::Inhibits => "inhibits",
            Predicate::Stabilizes => "stabilizes",
            Predicate::Destabilizes => "destabilizes",
            Predicate::ConvertsTo => "converts_to",
            Predicate::Accumulates => "accumulates",
            Predicate::InhibitsActivityOf => "inhibits_activity_of",
            Predicate::Modifies => "modifies",
            Predicate::Binds => "binds",
            Predicate::TranslocatesTo => "translocates_to",
            Predicate::AssociatesWith => "associates_with",
        }
    }
}

impl FromStr for Predicate {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "causes" => Ok(Predicate::Causes),
            "enables" => Ok(Predicate::Enables),
            "prevents" => Ok(Predicate::Prevents),
            "increases" => Ok(Predicate::Increases),
            "decreases" => Ok(Predicate::Decreases),
            "activates" => Ok(Predicate::Activates),
            "inhibits" => Ok(Predicate::Inhibits),
            "stabilizes" => Ok(Predicate::Stabilizes),
            "destabilizes" => Ok(Predicate::Destabilizes),
            "converts_to" => Ok(Predicate::ConvertsTo),
            "accumulates" => Ok(Predicate::Accumulates),
            "inhibits_activity_of" => Ok(Predicate::InhibitsActivityOf),
            "modifies" => Ok(Predicate::Modifies),
            "binds" => Ok(Predicate::Binds),
            "translocates_to" => Ok(Predicate::TranslocatesTo),
            "associates_with" => Ok(Predicate::AssociatesWith),
            other => Err(MechError::Other(format!(
                "unknown predicate: {} (expected: {})",
                other,
                Self::VALID_PREDICATES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorical strength-of-support tag on an edge.
///
/// Declaration order ranks levels from direct biochemical evidence down to
/// hypothesis, so the derived `Ord` sorts strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    BiochemicalDirect,
    GeneticPerturbation,
    CellModel,
    AnimalModel,
    PatientOmics,
    Clinical,
    ReviewOrConsensus,
    Hypothesis,
}

impl EvidenceLevel {
    /// All valid evidence levels, strongest first
    pub const VALID_LEVELS: &'static [&'static str] = &[
        "biochemical_direct",
        "genetic_perturbation",
        "cell_model",
        "animal_model",
        "patient_omics",
        "clinical",
        "review_or_consensus",
        "hypothesis",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceLevel::BiochemicalDirect => "biochemical_direct",
            EvidenceLevel::GeneticPerturbation => "genetic_perturbation",
            EvidenceLevel::CellModel => "cell_model",
            EvidenceLevel::AnimalModel => "animal_model",
            EvidenceLevel::PatientOmics => "patient_omics",
            EvidenceLevel::Clinical => "clinical",
            EvidenceLevel::ReviewOrConsensus => "review_or_consensus",
            EvidenceLevel::Hypothesis => "hypothesis",
        }
    }
}

impl FromStr for EvidenceLevel {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "biochemical_direct" => Ok(EvidenceLevel::BiochemicalDirect),
            "genetic_perturbation" => Ok(EvidenceLevel::GeneticPerturbation),
            "cell_model" => Ok(EvidenceLevel::CellModel),
            "animal_model" => Ok(EvidenceLevel::AnimalModel),
            "patient_omics" => Ok(EvidenceLevel::PatientOmics),
            "clinical" => Ok(EvidenceLevel::Clinical),
            "review_or_consensus" => Ok(EvidenceLevel::ReviewOrConsensus),
            "hypothesis" => Ok(EvidenceLevel::Hypothesis),
            other => Err(MechError::Other(format!(
                "unknown evidence level: {} (expected: {})",
                other,
                Self::VALID_LEVELS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sign of an edge's effect on its object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
    #[serde(rename = "0")]
    Neutral,
}

impl FromStr for Polarity {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Polarity::Positive),
            "-" => Ok(Polarity::Negative),
            "0" => Ok(Polarity::Neutral),
            other => Err(MechError::Other(format!(
                "unknown polarity: {} (expected: +, -, 0)",
                other
            ))),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "+"),
            Polarity::Negative => write!(f, "-"),
            Polarity::Neutral => write!(f, "0"),
        }
    }
}

/// Typed vertex in the mechanism graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    name: String,
    synonyms: Vec<String>,
    description: Option<String>,
    xrefs: BTreeMap<String, String>,
    tags: Vec<String>,
}

impl Node {
    /// Create a node, enforcing that the id prefix before the first `:`
    /// matches the declared type.
    pub fn new(id: impl Into<String>, node_type: NodeType, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let prefix = id.split_once(':').map(|(prefix, _)| prefix);
        if prefix != Some(node_type.as_str()) {
            return Err(MechError::InvalidNodeId {
                id,
                expected: node_type.as_str().to_string(),
            });
        }
        Ok(Node {
            id,
            node_type,
            name: name.into(),
            synonyms: Vec::new(),
            description: None,
            xrefs: BTreeMap::new(),
            tags: Vec::new(),
        })
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_xrefs(mut self, xrefs: BTreeMap<String, String>) -> Self {
        self.xrefs = xrefs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn xrefs(&self) -> &BTreeMap<String, String> {
        &self.xrefs
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Directed, attributed relation between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    subject: String,
    predicate: Predicate,
    object: String,
    weight: f64,
    evidence_level: EvidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    polarity: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mechanism: Option<String>,
    context: BTreeMap<String, String>,
    citations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Edge {
    /// Create an edge, enforcing the weight range and rejecting self-loops.
    /// Endpoint existence is checked by [`crate::graph::Graph::add_edge`].
    pub fn new(
        subject: impl Into<String>,
        predicate: Predicate,
        object: impl Into<String>,
        weight: f64,
        evidence_level: EvidenceLevel,
    ) -> Result<Self> {
        let subject = subject.into();
        let object = object.into();
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(MechError::InvalidWeight(weight));
        }
        if subject == object {
            return Err(MechError::SelfLoop(subject));
        }
        Ok(Edge {
            subject,
            predicate,
            object,
            weight,
            evidence_level,
            polarity: None,
            mechanism: None,
            context: BTreeMap::new(),
            citations: Vec::new(),
            notes: None,
        })
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }

    pub fn with_context(mut self, context: BTreeMap<String, String>) -> Self {
        self.context = context;
        self
    }

    pub fn with_citations(mut self, citations: Vec<String>) -> Self {
        self.citations = citations;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn evidence_level(&self) -> EvidenceLevel {
        self.evidence_level
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    pub fn mechanism(&self) -> Option<&str> {
        self.mechanism.as_deref()
    }

    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}--> {} (w = {:.2}, ev = {})",
            self.subject, self.predicate, self.object, self.weight, self.evidence_level
        )
    }
}
