//! Built-in deck
//!
//! The email campaign strategy deck shown when no deck file is configured.

use crate::deck::store::SectionStore;
use crate::models::{ContentBlock, Section};
use crate::Result;

/// Build the store for the built-in deck
pub fn builtin_store() -> Result<SectionStore> {
    SectionStore::new(builtin_sections())
}

/// Sections of the built-in email campaign strategy deck
pub fn builtin_sections() -> Vec<Section> {
    vec![
        Section::new("executive-summary", "Executive Summary")
            .with_summary("Overview of campaign objectives and success metrics")
            .with_block(ContentBlock::text(
                "A four-week email program to re-engage dormant subscribers and lift \
                 revenue per recipient through segmentation and disciplined testing.",
            ))
            .with_block(ContentBlock::metric("Target open rate", "25%", ""))
            .with_block(ContentBlock::metric("Target click rate", "4%", ""))
            .with_block(ContentBlock::metric("Conversion lift", "20%", ""))
            .with_block(ContentBlock::card(
                "Highlight",
                "Segmented sends are expected to deliver most of the revenue gain.",
            )),
        Section::new("project-overview", "Project Overview")
            .with_summary("Problem statement and solution approach")
            .with_block(ContentBlock::card(
                "Problem",
                "Engagement has declined for three consecutive quarters and one in \
                 three subscribers has not opened an email in 90 days.",
            ))
            .with_block(ContentBlock::card(
                "Approach",
                "Rebuild templates for mobile, split the list by behaviour and run a \
                 structured A/B testing cadence.",
            ))
            .with_block(ContentBlock::bullets(
                "Scope",
                &["Newsletter", "Promotional sends", "Win-back series", "Onboarding flow"],
            )),
        Section::new("platform-selection", "Platform Selection")
            .with_summary("Comparison of email marketing platforms")
            .with_block(ContentBlock::card(
                "Mailchimp",
                "Fast setup and strong templates; automation limits on lower tiers.",
            ))
            .with_block(ContentBlock::card(
                "Klaviyo",
                "Deep e-commerce integration and predictive segments; higher cost per contact.",
            ))
            .with_block(ContentBlock::card(
                "HubSpot",
                "Unified CRM and reporting; best fit when sales and marketing share data.",
            ))
            .with_block(ContentBlock::chart(
                "Fit score (out of 100)",
                &[("Mailchimp", 72), ("Klaviyo", 88), ("HubSpot", 80)],
            )),
        Section::new("email-design", "Email Design Strategy")
            .with_summary("Responsive template design strategy")
            .with_block(ContentBlock::bullets(
                "Template principles",
                &[
                    "Single-column layout under 600px",
                    "One primary call to action above the fold",
                    "Live text over images for accessibility",
                    "Dark mode tested colours",
                ],
            ))
            .with_block(ContentBlock::metric("Mobile opens", "61%", "Share of opens on phones"))
            .with_block(ContentBlock::card(
                "Brand kit",
                "Shared header, footer and button components keep every send consistent.",
            )),
        Section::new("segmentation", "Segmentation Strategy")
            .with_summary("Audience targeting and personalization")
            .with_block(ContentBlock::card(
                "New subscribers",
                "Welcome series with product education over the first two weeks.",
            ))
            .with_block(ContentBlock::card(
                "Active buyers",
                "Replenishment reminders and loyalty offers based on order history.",
            ))
            .with_block(ContentBlock::card(
                "Lapsed customers",
                "Win-back sequence with an escalating incentive.",
            ))
            .with_block(ContentBlock::chart(
                "List share by segment (%)",
                &[("New", 18), ("Active", 47), ("Lapsed", 35)],
            )),
        Section::new("campaign-timeline", "Campaign Timeline")
            .with_summary("4-week implementation timeline")
            .with_block(ContentBlock::bullets(
                "Weekly plan",
                &[
                    "Week 1: audit list health and migrate templates",
                    "Week 2: launch onboarding and win-back flows",
                    "Week 3: first A/B test round on subject lines",
                    "Week 4: roll out winners and review results",
                ],
            )),
        Section::new("key-metrics", "Key Metrics & KPIs")
            .with_summary("Performance measurement framework")
            .with_block(ContentBlock::metric("Open rate", "25%", "Unique opens over delivered"))
            .with_block(ContentBlock::metric("Click-through rate", "2-3%", "Unique clicks over delivered"))
            .with_block(ContentBlock::metric("Unsubscribe rate", "<0.5%", "Per send"))
            .with_block(ContentBlock::metric("Deliverability", "98%", "Accepted by receiving servers"))
            .with_block(ContentBlock::text(
                "Revenue per recipient is reported weekly alongside the engagement metrics.",
            )),
        Section::new("ab-testing", "A/B Testing Framework")
            .with_summary("Testing methodology and optimization")
            .with_block(ContentBlock::bullets(
                "Test variables",
                &["Subject line", "Send time", "Call to action copy", "Hero image"],
            ))
            .with_block(ContentBlock::card(
                "Method",
                "Split 20% of the segment into two arms, wait four hours, send the winner \
                 to the remaining 80%.",
            ))
            .with_block(ContentBlock::metric("Confidence level", "95%", "Required before a winner is declared")),
        Section::new("performance-analysis", "Performance Analysis")
            .with_summary("Monitoring and reporting structure")
            .with_block(ContentBlock::chart(
                "Projected open rate by week (%)",
                &[("Week 1", 18), ("Week 2", 21), ("Week 3", 23), ("Week 4", 25)],
            ))
            .with_block(ContentBlock::card(
                "Reporting",
                "A weekly dashboard review with a written summary of anomalies and actions.",
            )),
        Section::new("case-studies", "Case Studies")
            .with_summary("Real-world campaign examples")
            .with_block(ContentBlock::card(
                "Retail win-back",
                "A three-email win-back series recovered 12% of lapsed customers within 60 days.",
            ))
            .with_block(ContentBlock::card(
                "SaaS onboarding",
                "Behaviour-triggered onboarding raised trial conversion from 9% to 14%.",
            ))
            .with_block(ContentBlock::metric("Average revenue lift", "30%", "")),
        Section::new("budget-resources", "Budget & Resources")
            .with_summary("Resource allocation and ROI projections")
            .with_block(ContentBlock::chart(
                "Budget allocation (%)",
                &[("Platform", 35), ("Design", 25), ("Copy", 20), ("Analytics", 20)],
            ))
            .with_block(ContentBlock::metric("Projected ROI", "$38 per $1", "Industry benchmark"))
            .with_block(ContentBlock::card(
                "Team",
                "One campaign manager, one designer and a part-time analyst.",
            )),
        Section::new("recommendations", "Recommendations")
            .with_summary("Strategic implementation guidance")
            .with_block(ContentBlock::card(
                "Start with segmentation",
                "Segmented sends outperform broadcasts on every engagement metric.",
            ))
            .with_block(ContentBlock::card(
                "Automate lifecycle flows",
                "Welcome, abandonment and win-back flows run continuously after setup.",
            ))
            .with_block(ContentBlock::card(
                "Test continuously",
                "Keep one experiment running per week and log every result.",
            )),
        Section::new("conclusion", "Conclusion")
            .with_summary("Summary and next steps")
            .with_block(ContentBlock::text(
                "The program targets a measurable lift within four weeks using tools the \
                 team already knows.",
            ))
            .with_block(ContentBlock::bullets(
                "Next steps",
                &[
                    "Approve platform and budget",
                    "Kick off the template rebuild",
                    "Schedule the first test round",
                ],
            )),
    ]
}
