//! Static page copy: plans, features, benefits, templates and footer links

use crate::core::workflow::Complexity;

/// Billing period selected on the pricing toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }
}

/// Percentage knocked off the monthly price when billed yearly
pub const YEARLY_DISCOUNT_PERCENT: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanPrice {
    /// Whole dollars per month
    PerMonth(u32),
    Custom,
}

impl PlanPrice {
    /// Monthly-equivalent dollars for the cycle, rounded to the nearest dollar
    pub fn amount(&self, cycle: BillingCycle) -> Option<u32> {
        let PlanPrice::PerMonth(dollars) = *self else {
            return None;
        };
        Some(match cycle {
            BillingCycle::Monthly => dollars,
            BillingCycle::Yearly => {
                let cents = dollars * (100 - YEARLY_DISCOUNT_PERCENT);
                (cents + 50) / 100
            }
        })
    }

    /// Price as shown on the card: `"$19"`, `"$15"` or `"Custom"`
    pub fn label(&self, cycle: BillingCycle) -> String {
        match self.amount(cycle) {
            Some(dollars) => format!("${dollars}"),
            None => "Custom".to_string(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PlanPrice::Custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: PlanPrice,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

impl Plan {
    pub fn cta(&self) -> &'static str {
        if self.price.is_custom() {
            "Contact Sales"
        } else {
            "Start Free Trial"
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "starter",
        name: "Starter",
        price: PlanPrice::PerMonth(19),
        features: &[
            "Single n8n Instance",
            "2GB RAM / 1 vCPU",
            "Daily Backups",
            "Community Support",
            "Unlimited Executions",
        ],
        recommended: false,
    },
    Plan {
        id: "pro",
        name: "Professional",
        price: PlanPrice::PerMonth(49),
        features: &[
            "Dedicated n8n Instance",
            "8GB RAM / 2 vCPU",
            "Daily Backups + Snapshots",
            "Priority Email Support",
            "Custom Domain Support",
            "Binary Data Storage",
        ],
        recommended: true,
    },
    Plan {
        id: "ent",
        name: "Enterprise",
        price: PlanPrice::Custom,
        features: &[
            "High-Availability Cluster",
            "Multi-node scaling",
            "Dedicated Account Manager",
            "24/7 Phone Support",
            "SSO Integration",
            "Custom SLA",
        ],
        recommended: false,
    },
];

/// Icon, title and body of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn tile(icon: &'static str, title: &'static str, description: &'static str) -> Tile {
    Tile {
        icon,
        title,
        description,
    }
}

pub const FEATURES: [Tile; 6] = [
    tile(
        "cloud",
        "1-Click Deploy",
        "Launch your dedicated n8n instance in seconds. No terminal knowledge required.",
    ),
    tile(
        "lock",
        "Military-Grade Security",
        "Encryption at rest and in transit. Automated SSL and dedicated firewall.",
    ),
    tile(
        "refresh-ccw",
        "Daily Backups",
        "Never lose a workflow. We perform full instance snapshots every 24 hours.",
    ),
    tile(
        "zap",
        "Turbo Speed",
        "AMD EPYC processors and NVMe drives ensure your nodes execute instantly.",
    ),
    tile(
        "bar-chart",
        "Smart Monitoring",
        "Real-time resource usage graphs and automated error alerts via email or Slack.",
    ),
    tile(
        "globe",
        "Global Edge",
        "Choose from 12 locations across US, Europe, and Asia for minimal latency.",
    ),
];

pub const BENEFITS: [Tile; 4] = [
    tile(
        "shield-check",
        "Full Data Sovereignty",
        "Keep your sensitive API keys, customer data, and proprietary logic on your own private infrastructure. No third-party access to your execution logs.",
    ),
    tile(
        "infinity",
        "Zero Execution Limits",
        "Forget paying per execution. Run millions of workflows for a single flat monthly fee. Your only limit is the hardware you choose.",
    ),
    tile(
        "terminal",
        "Technical Freedom",
        "Install community nodes, use custom Python/JS libraries, and connect to local databases or VPNs that SaaS clouds can't reach.",
    ),
    tile(
        "piggy-bank",
        "Predictable Cost",
        "Scale your automation team without scaling your bill. Self-hosting is typically 70-90% cheaper for high-volume automation users.",
    ),
];

/// Rows under the "Why self-hosted" intro
pub const HIGHLIGHTS: [Tile; 2] = [
    tile(
        "database",
        "Unrestricted Database Access",
        "Directly connect to your internal SQL or NoSQL databases without complex tunnels.",
    ),
    tile(
        "key",
        "Proprietary Node Support",
        "Upload and use private nodes developed specifically for your enterprise requirements.",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub category: &'static str,
    pub nodes: u32,
    pub complexity: Complexity,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: [Template; 4] = [
    Template {
        title: "AI Content Architect",
        category: "Generative AI",
        nodes: 12,
        complexity: Complexity::Advanced,
        icon: "bot",
        description: "Automated multi-channel content engine using advanced AI to turn 1 prompt into social posts.",
    },
    Template {
        title: "Lead Magnet Pro",
        category: "Marketing",
        nodes: 8,
        complexity: Complexity::Intermediate,
        icon: "zap",
        description: "Connect Typeform to Google Sheets and Slack with automated personalized PDF generation.",
    },
    Template {
        title: "DevOps Sentinel",
        category: "Infrastructure",
        nodes: 15,
        complexity: Complexity::Expert,
        icon: "layout-template",
        description: "Monitor GitHub webhooks, run CI tests, and deploy to production with automated rollback logic.",
    },
    Template {
        title: "Financial Sync",
        category: "Operations",
        nodes: 6,
        complexity: Complexity::Beginner,
        icon: "file-json",
        description: "Daily synchronization between Stripe, QuickBooks, and your internal SQL database.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const NAV_LINKS: [NavLink; 4] = [
    link("Features", "#features"),
    link("Pricing", "#pricing"),
    link("Docs", "#docs"),
    link("Support", "#support"),
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Platform",
        links: &[
            link("Managed n8n", "#"),
            link("Pricing", "#pricing"),
            link("Edge Nodes", "#"),
            link("Security", "#"),
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[
            link("Documentation", "#docs"),
            link("Tutorials", "#"),
            link("Community", "#"),
            link("Status Page", "#"),
        ],
    },
];

pub const LEGAL_LINKS: [NavLink; 3] = [
    link("Security Audit", "#"),
    link("Privacy Policy", "#"),
    link("Terms of Service", "#"),
];

/// Icon names of the social buttons in the footer
pub const SOCIALS: [NavLink; 3] = [
    link("twitter", "#"),
    link("github", "#"),
    link("linkedin", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_prices() {
        let labels: Vec<String> = PLANS
            .iter()
            .map(|p| p.price.label(BillingCycle::Monthly))
            .collect();
        assert_eq!(labels, ["$19", "$49", "Custom"]);
    }

    #[test]
    fn test_yearly_prices_are_discounted() {
        let labels: Vec<String> = PLANS
            .iter()
            .map(|p| p.price.label(BillingCycle::Yearly))
            .collect();
        assert_eq!(labels, ["$15", "$39", "Custom"]);
    }

    #[test]
    fn test_rounding_is_to_nearest_dollar() {
        // 10 * 0.8 = 8, 13 * 0.8 = 10.4, 12 * 0.8 = 9.6
        assert_eq!(PlanPrice::PerMonth(10).amount(BillingCycle::Yearly), Some(8));
        assert_eq!(PlanPrice::PerMonth(13).amount(BillingCycle::Yearly), Some(10));
        assert_eq!(PlanPrice::PerMonth(12).amount(BillingCycle::Yearly), Some(10));
        assert_eq!(PlanPrice::Custom.amount(BillingCycle::Yearly), None);
    }

    #[test]
    fn test_one_recommended_plan() {
        let recommended: Vec<&str> = PLANS
            .iter()
            .filter(|p| p.recommended)
            .map(|p| p.name)
            .collect();
        assert_eq!(recommended, ["Professional"]);
        assert_eq!(PLANS[2].cta(), "Contact Sales");
        assert_eq!(PLANS[0].cta(), "Start Free Trial");
    }

    #[test]
    fn test_billing_toggle() {
        assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_template_table() {
        let levels: Vec<&str> = TEMPLATES.iter().map(|t| t.complexity.as_str()).collect();
        assert_eq!(levels, ["Advanced", "Intermediate", "Expert", "Beginner"]);
        assert_eq!(TEMPLATES.iter().map(|t| t.nodes).sum::<u32>(), 41);
    }
}
