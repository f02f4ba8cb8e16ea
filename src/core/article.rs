use crate::core::content::Inline::{Code, Em, Link, Strong, Text};
use crate::core::content::{Article, Block, Hero, Stat};

pub const ARTICLE: Article = Article {
    hero: HERO,
    blocks: BLOCKS,
};

const HERO: Hero = Hero {
    kicker: "Computational Neuroscience · AI-Assisted Implementation · 2026",
    title: "An A100, Claude, and ",
    title_emphasis: "Under Two Hours",
    subtitle: "How I used an NVIDIA A100 and Claude to implement a Nature 2023 paper on neural latent embeddings — reproducing key results, debugging in real time, and decoding a rat's position from hippocampal neurons.",
    author: "Nayanika Biswas",
    author_initial: "N",
    meta: "February 2026 · 14 min read",
};

const HIPPOCAMPUS_STATS: &[Stat] = &[
    Stat {
        value: "~5cm",
        label: "Position error (CEBRA)",
    },
    Stat {
        value: ">0.9",
        label: "Decoding R²",
    },
    Stat {
        value: "~50cm",
        label: "Shuffled control error",
    },
];

const CONSISTENCY_STATS: &[Stat] = &[
    Stat {
        value: "0.89",
        label: "CEBRA cross-subject R²",
    },
    Stat {
        value: "-0.29",
        label: "PCA cross-subject R²",
    },
];

const BLOCKS: &[Block] = &[
    Block::Paragraph(&[
        Text("A few years ago, when I was still in college, a paper landed in "),
        Em("Nature"),
        Text(" that made me stop scrolling. It was called "),
        Em("\"Learnable latent embeddings for joint behavioural and neural analysis\""),
        Text(" — better known by the name of its algorithm, "),
        Strong("CEBRA"),
        Text(". The promise was extraordinary: a single method that could take the chaotic firing of thousands of neurons and distill it into a clean, low-dimensional picture of what an animal was actually "),
        Em("doing"),
        Text("."),
    ]),
    Block::Paragraph(&[Text(
        "Last week, that day came. I opened Google Colab, connected to an NVIDIA A100, opened Claude in a browser tab, and started building.",
    )]),
    Block::PullQuote(&[Text(
        "Claude didn't just help me write code — it read the paper, designed the notebook structure, and debugged errors faster than I could read the tracebacks. The A100 handled the training. I handled the chai.",
    )]),
    Block::Paragraph(&[
        Text("I gave Claude the paper and asked it to summarize the method. Within seconds it broke down the contrastive learning framework, the sampling strategies, the InfoNCE objective, and identified that CEBRA was already "),
        Code("pip install"),
        Text("-able. It proposed a four-section notebook and generated the entire thing. Was it perfect out of the box? No. And that's the interesting part."),
    ]),
    Block::Divider(Some("The Bugs")),
    Block::Heading("Real-time debugging with an AI co-pilot"),
    Block::Paragraph(&[
        Text("The first error hit immediately. Claude had written "),
        Code("total_mem"),
        Text(" but the correct PyTorch attribute is "),
        Code("total_memory"),
        Text(". One character. Fixed in one message."),
    ]),
    Block::DebugNote {
        title: "Bug #1 — The attribute typo",
        body: &[
            Code("total_mem"),
            Text(" → "),
            Code("total_memory"),
            Text(". The kind of thing that wastes 10 minutes on StackOverflow but takes Claude 2 seconds. This is where AI-assisted coding shines — not on the hard conceptual problems, but on the thousands of tiny friction points."),
        ],
    },
    Block::Paragraph(&[
        Text("The hippocampus data loader failed silently — CEBRA's API had evolved between versions. Claude rewrote it with four fallback methods: "),
        Code("cebra.datasets.init()"),
        Text(", "),
        Code("cebra.load_data()"),
        Text(", manual joblib download, and synthetic generation as a last resort."),
    ]),
    Block::DebugNote {
        title: "Bug #2 — The data loader cascade",
        body: &[Text(
            "Rather than pinning a version, Claude built a cascade of four strategies. First one that works wins. If all fail, synthetic place cells are generated so the notebook still runs. Robust and pragmatic.",
        )],
    },
    Block::Paragraph(&[
        Text("Then the showstopper. The "),
        Code("ripser"),
        Text(" topology cell hung for five minutes. CPU-only, O(n³) on 2000 points. Colab's interrupt button was unresponsive. Claude suggested: \"drop to "),
        Code("max_dim=1"),
        Text(" and "),
        Code("n_subsample=800"),
        Text(". β₁ is the one that proves the ring.\" After a forced restart and 15 minutes of retraining, the topology cell finished in 8 seconds."),
    ]),
    Block::DebugNote {
        title: "Bug #3 — Ripser hangs on H₂",
        body: &[
            Text("Persistent homology with "),
            Code("max_dim=2"),
            Text(" is computationally explosive on CPU. The fix: drop to H₁ only, subsample to 800 points. Sometimes the best debugging is knowing what to safely skip."),
        ],
    },
    Block::Paragraph(&[Text(
        "There was also a Colab session disconnect that wiped all variables. Claude diagnosed it instantly: \"Those outputs are stale from the previous session. After a disconnect, the kernel resets but displayed outputs persist visually.\" A subtle trap that catches every Colab user eventually.",
    )]),
    Block::Paragraph(&[Text(
        "Total debugging time across all issues: ~15 minutes. The rest was pure execution.",
    )]),
    Block::Divider(Some("Part I")),
    Block::Heading("What is CEBRA, and why should you care?"),
    Block::Paragraph(&[Text(
        "Imagine eavesdropping on 100 neurons in a rat's hippocampus while it runs back and forth on a track. Each neuron fires at different rates depending on location — the famous \"place cells.\" But with 100 neurons doing their own thing, the raw data is a 100-dimensional mess.",
    )]),
    Block::Paragraph(&[
        Text("PCA compresses it linearly. t-SNE and UMAP are nonlinear but inconsistent — run them twice, get different results. CEBRA uses "),
        Em("contrastive learning"),
        Text(": push similar neural snapshots together, push different ones apart. The result is a latent space where geometry "),
        Em("means something"),
        Text(" — and it's consistent across animals and recording technologies."),
    ]),
    Block::Divider(Some("Part II")),
    Block::Heading("Synthetic ground truth"),
    Block::Paragraph(&[Text(
        "Before touching real brain data, I generated synthetic neural activity with a known 2D latent passed through nonlinear mixing to 100 neurons with Poisson noise. Can CEBRA recover the original structure?",
    )]),
    Block::Figure {
        key: "synthetic",
        caption: Some("Recovering ground truth latents. CEBRA produces a smooth, color-continuous embedding preserving the original structure, while PCA partially captures it and t-SNE/UMAP fragment the topology."),
        wide: true,
    },
    Block::Paragraph(&[Text(
        "CEBRA recovers the latent as a clean continuous arc with the color gradient intact. PCA captures the rough shape but smears structure. UMAP and t-SNE do well locally but distort global geometry.",
    )]),
    Block::Figure {
        key: "reconstruction",
        caption: Some("R² reconstruction scores. CEBRA leads at 0.76, demonstrating the highest linear recoverability of the true latent."),
        wide: false,
    },
    Block::Divider(Some("Part III")),
    Block::Heading("Into the hippocampus"),
    Block::Paragraph(&[Text(
        "Real electrophysiology from rat CA1 — ~80 neurons recorded while the animal ran on a 1.6-meter linear track. I trained CEBRA in hypothesis mode (position + direction labels) and discovery mode (time only, no labels).",
    )]),
    Block::Figure {
        key: "hippocampus",
        caption: Some("3D hippocampal embeddings. Top: hypothesis-driven models (P+D, Position, Direction). Bottom: CEBRA-Time, shuffled control, and P+D colored by running direction."),
        wide: true,
    },
    Block::Paragraph(&[
        Text("Position+direction produces two sweeping arcs forming a ring — one for each running direction. CEBRA-Time, with "),
        Em("no labels at all"),
        Text(", independently discovers a similar ring. The shuffled control? A featureless blob. Science working as intended."),
    ]),
    Block::Figure {
        key: "decoding",
        caption: Some("Position decoding. CEBRA models achieve R² > 0.9 and MAE ~5 cm, dramatically outperforming PCA and the shuffled control."),
        wide: false,
    },
    Block::StatGrid(HIPPOCAMPUS_STATS),
    Block::Figure {
        key: "trajectory",
        caption: Some("Decoded trajectory (teal) overlaid on ground truth (gray). The kNN decoder tracks every lap with remarkable fidelity."),
        wide: true,
    },
    Block::Divider(Some("Part IV")),
    Block::Heading("Do different brains agree?"),
    Block::Paragraph(&[Text(
        "I simulated \"multiple subjects\" by partitioning neurons into four groups and training CEBRA independently. Do the embeddings agree?",
    )]),
    Block::Figure {
        key: "consistency",
        caption: Some("Cross-subject consistency. CEBRA: R² > 0.88 between all pairs. PCA: negatively correlated. The boxplot quantifies the dramatic gap."),
        wide: true,
    },
    Block::Paragraph(&[
        Text("CEBRA's matrix is uniformly deep red — every pair above 0.88. PCA is "),
        Em("negative"),
        Text(". Different PCA runs don't just disagree — they're actively anti-correlated."),
    ]),
    Block::StatGrid(CONSISTENCY_STATS),
    Block::Divider(Some("Part V")),
    Block::Heading("Topology: proving the ring is real"),
    Block::Paragraph(&[Text(
        "Persistent cohomology mathematically verifies the ring. A linear track should give β₀=1 (one component), β₁=1 (one loop). We inflate spheres around each point and track features that persist across scales.",
    )]),
    Block::Figure {
        key: "persistence",
        caption: Some("Persistence diagrams. Points far from the diagonal are long-lived features. CEBRA models show clean H₁ loops."),
        wide: false,
    },
    Block::Figure {
        key: "lifespans",
        caption: Some("Lifespan diagrams. CEBRA (P+D) has a dominant H₀ component and persistent H₁ loop — the ring topology expected."),
        wide: false,
    },
    Block::Paragraph(&[Text(
        "Extracting the circular coordinate and plotting against true position confirms it: a clean monotonic mapping for CEBRA, random noise for shuffled.",
    )]),
    Block::Figure {
        key: "circular",
        caption: Some("Circular coordinates vs position. CEBRA: smooth monotonic. Shuffled: structureless."),
        wide: true,
    },
    Block::Divider(Some("Reflection")),
    Block::Heading("What two hours and an AI taught me"),
    Block::Paragraph(&[Text(
        "When I first read this paper in college, it felt unreachable — dense math, custom infrastructure, expensive recordings.",
    )]),
    Block::Paragraph(&[
        Text("What changed wasn't just "),
        Code("pip install cebra"),
        Text(" or cloud GPUs. It was the workflow. Claude read the paper and designed the experiment. When "),
        Code("total_mem"),
        Text(" should have been "),
        Code("total_memory"),
        Text(", it fixed it in seconds. When the data loader broke, it wrote four fallbacks. When ripser hung, it knew which parameters to cut. When Colab disconnected, it explained why the stale outputs were deceiving me."),
    ]),
    Block::PullQuote(&[Text(
        "15 minutes debugging, 105 minutes of productive work. That's AI-assisted research — not replacing the scientist, but removing the friction between the question and the answer.",
    )]),
    Block::Paragraph(&[Text(
        "Contrastive learning — \"push similar things together, push different things apart\" — is simple enough to explain to a child. Yet applied to neural recordings, it reveals the hidden geometry of cognition. Rings for linear tracks. The brain's spatial map, decoded from static.",
    )]),
    Block::Paragraph(&[Text(
        "I started this project to learn a technique. I ended it feeling like I'd glimpsed something deeper about how minds — biological and artificial — organize the world. And I did it in less time than a long movie.",
    )]),
    Block::Divider(None),
    Block::References {
        title: "References",
        entries: &[
            &[
                Text("Schneider, Lee & Mathis. "),
                Em("Learnable latent embeddings for joint behavioural and neural analysis."),
                Text(" Nature 617, 360–368 (2023)"),
            ],
            &[
                Text("CEBRA: "),
                Link {
                    text: "cebra.ai/docs",
                    href: "https://cebra.ai/docs/",
                },
                Text(" · "),
                Link {
                    text: "GitHub",
                    href: "https://github.com/AdaptiveMotorControlLab/CEBRA",
                },
            ],
            &[
                Text("Grosmark & Buzsáki. "),
                Em("Diversity in neural firing dynamics..."),
                Text(" Science 351, 1440–1443 (2016)"),
            ],
        ],
    },
    Block::Footer(&[
        "Written by Nayanika Biswas · February 2026",
        "Built with CEBRA, an A100, Claude, and an unreasonable amount of chai",
    ]),
];

