//! Seed data for the mock store.

use std::collections::HashMap;

use crate::types::{Expectation, ExpectationStatus, MilestoneContent, VoteCounts};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The four published expectations, deadlines relative to `now` (unix ms).
pub fn expectations(now: i64) -> Vec<Expectation> {
    vec![
        Expectation {
            id: "1".into(),
            milestone_uri: "ipfs://QmMock1".into(),
            title: "Add Generative Music NFT Feature".into(),
            summary: "Implement a feature that allows artists to mint generative audio NFTs using the built-in metadata layer.".into(),
            deadline: now + 7 * DAY_MS,
            status: ExpectationStatus::Ongoing,
            vote_counts: VoteCounts::new(45, 12),
        },
        Expectation {
            id: "2".into(),
            milestone_uri: "ipfs://QmMock2".into(),
            title: "Implement Cross-Chain Revenue Distribution".into(),
            summary: "Create a system for distributing revenue across multiple blockchain networks.".into(),
            deadline: now - 2 * DAY_MS,
            status: ExpectationStatus::Fulfilled,
            vote_counts: VoteCounts::new(78, 15),
        },
        Expectation {
            id: "3".into(),
            milestone_uri: "ipfs://QmMock3".into(),
            title: "Launch Mobile App for Shareholders".into(),
            summary: "Develop a mobile application for shareholders to track their investments and vote on proposals.".into(),
            deadline: now - 5 * DAY_MS,
            status: ExpectationStatus::Rejected,
            vote_counts: VoteCounts::new(23, 67),
        },
        Expectation {
            id: "4".into(),
            milestone_uri: "ipfs://QmMock4".into(),
            title: "Integrate AI-Powered Music Analytics".into(),
            summary: "Add AI-driven analytics to help artists understand their audience and optimize their music strategy.".into(),
            deadline: now + 3 * DAY_MS,
            status: ExpectationStatus::Ongoing,
            vote_counts: VoteCounts::new(34, 8),
        },
    ]
}

/// Milestone content keyed by content hash.
pub fn milestone_content() -> HashMap<String, MilestoneContent> {
    let entries = [
        (
            "QmMock1",
            "Add Generative Music NFT Feature",
            "bip1.md",
            "### Summary
Add a feature that allows artists to mint generative audio NFTs using the built-in metadata layer.

### Rationale
To improve tooling and automate audio variations for music drops, we propose implementing a generative music NFT system. This will enable artists to create unique variations of their tracks programmatically, increasing the collectibility and value of their NFT releases.

### Technical Implementation
- Smart contract integration for metadata storage
- Audio processing pipeline for variations
- Web3 integration for minting
- Frontend interface for artists

### Benefits
- Increased revenue potential for artists
- Enhanced collector experience
- Automated content generation
- Reduced manual work for artists",
            "2025-01-15T13:00:00Z",
        ),
        (
            "QmMock2",
            "Implement Cross-Chain Revenue Distribution",
            "bip2.md",
            "### Summary
Create a system for distributing revenue across multiple blockchain networks to maximize accessibility and reduce gas fees.

### Rationale
Currently, revenue distribution is limited to a single chain. By implementing cross-chain distribution, we can reach more shareholders and optimize for cost and speed.

### Technical Implementation
- Bridge integration for multiple chains
- Automated distribution scheduling
- Gas optimization strategies
- Multi-chain wallet support",
            "2025-01-10T10:00:00Z",
        ),
        (
            "QmMock3",
            "Launch Mobile App for Shareholders",
            "bip3.md",
            "### Summary
Develop a mobile application for shareholders to track their investments and vote on proposals.

### Rationale
Mobile access is crucial for user engagement. A dedicated app will improve the shareholder experience and increase participation in governance.

### Technical Implementation
- React Native development
- Wallet integration
- Push notifications
- Offline capability",
            "2025-01-05T15:00:00Z",
        ),
        (
            "QmMock4",
            "Integrate AI-Powered Music Analytics",
            "bip4.md",
            "### Summary
Add AI-driven analytics to help artists understand their audience and optimize their music strategy.

### Rationale
Data-driven insights are essential for artist success. AI analytics will provide valuable information about audience behavior and music performance.

### Technical Implementation
- Machine learning models for audience analysis
- Real-time data processing
- Predictive analytics
- Artist dashboard integration",
            "2025-01-12T09:00:00Z",
        ),
    ];

    entries
        .into_iter()
        .map(|(hash, title, bip, content, created_at)| {
            (
                hash.to_string(),
                MilestoneContent {
                    title: title.to_string(),
                    bip_link: format!(
                        "https://github.com/hackinsync/bigincognito/proposals/{}",
                        bip
                    ),
                    content: content.to_string(),
                    created_at: created_at.to_string(),
                },
            )
        })
        .collect()
}
