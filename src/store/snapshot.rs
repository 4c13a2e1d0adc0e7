//! Snapshot loading.
//!
//! The note collection arrives as a YAML document from whatever owns the
//! notes (the external store collaborator); this module parses it into the
//! domain types. A built-in sample collection serves as the default
//! snapshot so the tool works out of the box.

use std::path::Path;

use thiserror::Error;

use crate::domain::Note;

/// Error returned when a snapshot cannot be loaded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is not a valid note collection.
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parses a YAML snapshot document into a note collection.
///
/// # Errors
///
/// Returns `SnapshotError::Parse` when the document is malformed or any
/// note fails domain validation (bad id, empty title, invalid tag).
pub fn load_snapshot(yaml: &str) -> Result<Vec<Note>, SnapshotError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Reads and parses a snapshot file.
pub fn read_snapshot(path: &Path) -> Result<Vec<Note>, SnapshotError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_snapshot(&contents)
}

/// Returns the built-in sample collection.
pub fn sample_notes() -> Vec<Note> {
    load_snapshot(SAMPLE_SNAPSHOT).expect("embedded sample snapshot is valid")
}

/// The built-in sample collection: six interlinked notes about personal
/// knowledge management.
pub const SAMPLE_SNAPSHOT: &str = r#"
- id: 01HQ3K5M70XJK4QZPW8V2R6T9Y
  title: Getting Started with PKM
  content: |-
    # Getting Started with Personal Knowledge Management

    Personal Knowledge Management (PKM) is the practice of collecting, organizing, and utilizing information to enhance learning and productivity.

    ## Key Principles

    - **Capture everything**: Don't trust your memory
    - **Connect ideas**: Use [[backlinks]] to create relationships
    - **Review regularly**: Knowledge compounds over time

    ## Tools and Techniques

    - Use #productivity tags to categorize notes
    - Create [[Daily Notes]] for journaling
    - Build a [[Zettelkasten]] system for research

    ## Resources

    - [[Building a Second Brain]] by Tiago Forte
    - [[How to Take Smart Notes]] by Sönke Ahrens
    - [[Knowledge Management]] best practices
  tags:
    - productivity
    - learning
    - pkm
  created: 2024-01-15T00:00:00Z
  modified: 2024-01-15T00:00:00Z

- id: 01HQ3K5M71XJK4QZPW8V2R6T9Y
  title: Daily Notes Template
  content: |-
    # Daily Notes - {{date}}

    ## Today's Focus
    - [ ] Complete project proposal
    - [ ] Review team feedback
    - [ ] Plan tomorrow's priorities

    ## Notes
    - Had a great discussion about [[Knowledge Management]]
    - Need to explore #automation tools
    - Consider implementing [[Zettelkasten Method]]

    ## Reflections
    - Focus on deep work sessions
    - Minimize context switching

    ## Links
    - [[Yesterday's Note]]
    - [[Tomorrow's Planning]]

    #daily #template #reflection
  tags:
    - daily
    - template
    - reflection
  created: 2024-01-14T00:00:00Z
  modified: 2024-01-14T00:00:00Z

- id: 01HQ3K5M72XJK4QZPW8V2R6T9Y
  title: Zettelkasten Method
  content: |-
    # Zettelkasten Method

    The Zettelkasten method is a knowledge management system that emphasizes connecting ideas through a network of notes.

    ## Core Concepts

    1. **Atomic Notes**: Each note should contain one idea
    2. **Unique Identifiers**: Every note has a unique ID
    3. **Linking**: Connect related notes with [[backlinks]]

    ## Benefits

    - Encourages deep thinking
    - Reveals unexpected connections
    - Builds a personal knowledge graph

    ## Implementation

    Start with [[Getting Started with PKM]] and create your first [[Daily Notes]].

    Use #zettelkasten #knowledge-management tags for organization.

    See also: [[Building a Second Brain]]
  tags:
    - zettelkasten
    - knowledge-management
    - method
  created: 2024-01-13T00:00:00Z
  modified: 2024-01-13T00:00:00Z

- id: 01HQ3K5M73XJK4QZPW8V2R6T9Y
  title: Building a Second Brain
  content: |-
    # Building a Second Brain

    A methodology for creating a personal knowledge management system that acts as an extension of your thinking.

    ## The CODE Method

    - **Capture**: Save valuable information
    - **Organize**: Structure for actionability
    - **Distill**: Extract key insights
    - **Express**: Share your knowledge

    ## Key Insights

    Connected to [[Getting Started with PKM]] and builds on [[Zettelkasten Method]] principles.

    Use #productivity and #learning tags to track progress.

    ## Implementation Notes

    - Start small with [[Daily Notes Template]]
    - Focus on [[Knowledge Management]] fundamentals
    - Build connections through consistent practice
  tags:
    - productivity
    - learning
    - method
  created: 2024-01-12T00:00:00Z
  modified: 2024-01-12T00:00:00Z

- id: 01HQ3K5M74XJK4QZPW8V2R6T9Y
  title: Knowledge Management
  content: |-
    # Knowledge Management

    The systematic approach to capturing, distributing, and effectively using knowledge.

    ## Types of Knowledge

    - **Explicit**: Documented, codified knowledge
    - **Tacit**: Personal, experiential knowledge
    - **Implicit**: Knowledge that can be inferred

    ## Best Practices

    Referenced in [[Getting Started with PKM]] and [[Building a Second Brain]].

    Essential for implementing [[Zettelkasten Method]] effectively.

    Use with [[Daily Notes Template]] for consistent capture.

    #knowledge-management #learning #productivity
  tags:
    - knowledge-management
    - learning
    - productivity
  created: 2024-01-11T00:00:00Z
  modified: 2024-01-11T00:00:00Z

- id: 01HQ3K5M75XJK4QZPW8V2R6T9Y
  title: How to Take Smart Notes
  content: |-
    # How to Take Smart Notes

    By Sönke Ahrens - A guide to the [[Zettelkasten Method]] for students, academics, and knowledge workers.

    ## Core Principles

    - One idea per note
    - Connect everything
    - Think on paper

    ## Connection to Other Ideas

    Complements [[Building a Second Brain]] methodology.
    Essential reading for [[Getting Started with PKM]].
    Works well with [[Daily Notes Template]] workflow.

    Perfect foundation for [[Knowledge Management]] practices.

    #zettelkasten #learning #method #research
  tags:
    - zettelkasten
    - learning
    - method
    - research
  created: 2024-01-10T00:00:00Z
  modified: 2024-01-10T00:00:00Z
"#;
