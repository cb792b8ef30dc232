//! Static blog content and the queries the blog pages run over it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AiAutomation,
    MachineLearning,
    Productivity,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::AiAutomation => "AI Automation",
            Category::MachineLearning => "Machine Learning",
            Category::Productivity => "Productivity",
        }
    }
}

/// Category buttons on the blog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::AiAutomation),
        Filter::Only(Category::MachineLearning),
        Filter::Only(Category::Productivity),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, post: &PostSummary) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => post.category == c,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PostSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: Category,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub featured: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Article {
    pub summary: &'static PostSummary,
    pub long_date: &'static str,
    pub body_html: &'static str,
    pub tags: &'static [&'static str],
    pub related: &'static [&'static str],
}

const TEAM: &str = "Do Zero AI Team";

pub static POSTS: [PostSummary; 6] = [
    PostSummary {
        id: "what-is-autonomous-execution",
        title: "What is Autonomous Execution? The Complete Guide",
        excerpt: "Discover how autonomous execution is revolutionizing business workflows and why it matters for your organization in 2026.",
        category: Category::AiAutomation,
        author: TEAM,
        date: "Feb 15, 2026",
        read_time: "8 min read",
        featured: true,
    },
    PostSummary {
        id: "future-of-ai-automation-2025",
        title: "The Future of AI Automation in 2025",
        excerpt: "Explore the cutting-edge trends shaping AI automation and how businesses can prepare for the next wave of intelligent systems.",
        category: Category::AiAutomation,
        author: TEAM,
        date: "Feb 14, 2026",
        read_time: "6 min read",
        featured: false,
    },
    PostSummary {
        id: "building-ai-workflows-guide",
        title: "Building AI Workflows: A Step-by-Step Guide",
        excerpt: "Learn how to design and implement effective AI workflows that drive real business results.",
        category: Category::MachineLearning,
        author: TEAM,
        date: "Feb 13, 2026",
        read_time: "10 min read",
        featured: false,
    },
    PostSummary {
        id: "machine-learning-vs-traditional-automation",
        title: "Machine Learning vs Traditional Automation",
        excerpt: "Understanding the key differences between ML-powered automation and rule-based traditional systems.",
        category: Category::MachineLearning,
        author: TEAM,
        date: "Feb 12, 2026",
        read_time: "7 min read",
        featured: false,
    },
    PostSummary {
        id: "workflow-optimization-strategies",
        title: "5 Workflow Optimization Strategies for 2026",
        excerpt: "Practical strategies to optimize your business workflows and boost productivity.",
        category: Category::Productivity,
        author: TEAM,
        date: "Feb 11, 2026",
        read_time: "5 min read",
        featured: false,
    },
    PostSummary {
        id: "ai-agents-enterprise",
        title: "AI Agents in Enterprise: A Practical Guide",
        excerpt: "How enterprise organizations can leverage AI agents for complex workflow automation.",
        category: Category::AiAutomation,
        author: TEAM,
        date: "Feb 10, 2026",
        read_time: "9 min read",
        featured: false,
    },
];

/// Posts with a full body. Only the launch article has been written so far.
pub static ARTICLES: [Article; 1] = [Article {
    summary: &POSTS[0],
    long_date: "February 15, 2026",
    body_html: include_str!("blog/what-is-autonomous-execution.html"),
    tags: &[
        "AI",
        "Automation",
        "Machine Learning",
        "Workflow Optimization",
        "Business Intelligence",
    ],
    related: &["future-of-ai-automation-2025", "building-ai-workflows-guide"],
}];

pub fn summary(id: &str) -> Option<&'static PostSummary> {
    POSTS.iter().find(|p| p.id == id)
}

/// The featured post, if it passes `filter`.
pub fn featured(filter: Filter) -> Option<&'static PostSummary> {
    POSTS.iter().find(|p| p.featured && filter.matches(p))
}

/// Non-featured posts for the index grid, in publication order.
pub fn grid(filter: Filter) -> Vec<&'static PostSummary> {
    POSTS
        .iter()
        .filter(|p| !p.featured && filter.matches(p))
        .collect()
}

/// Article for `/blog/:id`. Ids without a written body fall back to the
/// launch article so every post link lands somewhere readable.
pub fn article_for(id: &str) -> &'static Article {
    ARTICLES
        .iter()
        .find(|a| a.summary.id == id)
        .unwrap_or(&ARTICLES[0])
}

pub fn related(article: &Article) -> Vec<&'static PostSummary> {
    article.related.iter().filter_map(|id| summary(id)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub network: &'static str,
    pub href: String,
}

pub fn share_links(url: &str, title: &str) -> [ShareLink; 3] {
    let url = urlencoding::encode(url);
    let text = urlencoding::encode(title);
    [
        ShareLink {
            network: "Twitter",
            href: format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
        },
        ShareLink {
            network: "LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        },
        ShareLink {
            network: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        },
    ]
}
