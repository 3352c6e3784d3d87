//! # Slide Content
//!
//! Static copy for every slide, structured so that any front-end can lay it
//! out. Numbers that can be derived (calculator output, impact costs) are
//! not stored here; they come from [`crate::calculations`].

use crate::slides::SlideId;

/// Colour role of a badge, card edge or highlight. Front-ends map these to
/// concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Amber,
    Red,
    Green,
    Indigo,
    Blue,
    Purple,
}

/// Everything shown on one slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideContent {
    pub slide: SlideId,
    /// Small pill above the heading
    pub badge: &'static str,
    pub accent: Accent,
    pub heading: &'static str,
    /// Part of `heading` drawn in the highlight colour
    pub emphasis: Option<(&'static str, Accent)>,
    /// Paragraph under the heading
    pub lead: Option<&'static str>,
    pub body: SlideBody,
    /// Closing paragraph
    pub footnote: Option<&'static str>,
}

impl SlideContent {
    /// Heading split around the emphasized part: `(before, emphasized, after)`
    pub fn heading_parts(&self) -> (&'static str, Option<(&'static str, Accent)>, &'static str) {
        match self.emphasis {
            Some((word, accent)) => match self.heading.split_once(word) {
                Some((before, after)) => (before, Some((word, accent)), after),
                None => (self.heading, None, ""),
            },
            None => (self.heading, None, ""),
        }
    }
}

/// Slide-specific body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideBody {
    /// Title slide: technique tags
    Tags(&'static [&'static str]),
    /// Problem slide: risk cards
    Cards(&'static [Card]),
    /// Objectives slide: numbered objectives
    Objectives(&'static [Objective]),
    /// Methodology slide: ordered steps
    Steps(&'static [&'static str]),
    /// Model slide: the formula and fit statistics
    Formula {
        formula: &'static str,
        stats: &'static [Stat],
    },
    /// Hypothesis testing slide
    Tests(&'static [HypothesisTest]),
    /// Live calculator (rendered from the estimator)
    Calculator,
    /// Business impact (costs rendered from the impact scenario)
    Impact {
        strength_note: &'static str,
        co2_note: &'static str,
    },
    /// Summary slide: key takeaways
    Takeaways(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub unit: Option<&'static str>,
    pub label: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypothesisTest {
    pub test: &'static str,
    pub hypothesis: &'static str,
    pub result: &'static str,
    pub verdict: &'static str,
    pub accent: Accent,
}

/// The model formula as shown on slide 5
pub const MODEL_FORMULA: &str = "strength = 23.914
  + 0.0974 × cement
  − 2.545 × ln(superplasticizer)
  − 0.2374 × water
  + 9.759 × ln(age)
  + 0.0683 × slag";

const TITLE_TAGS: &[&str] = &["R Language", "Regression", "Hypothesis Testing"];

const PROBLEM_CARDS: &[Card] = &[
    Card {
        icon: "💰",
        title: "Cement Overuse",
        description: "Conservative \"safe\" mixes inflate material costs by over-specifying cement content.",
    },
    Card {
        icon: "⚠️",
        title: "Strength Failures",
        description: "Occasional failures at 28-day testing require costly rework and delay timelines.",
    },
    Card {
        icon: "📊",
        title: "No Predictive Tool",
        description: "Decisions relied on experience and trial-and-error, not data-driven insight.",
    },
    Card {
        icon: "🌍",
        title: "Carbon Targets",
        description: "Excess cement usage undermines sustainability goals and carbon commitments.",
    },
];

const OBJECTIVES: &[Objective] = &[
    Objective {
        number: "01",
        title: "Quantify Influence",
        description: "Determine how each mix component (cement, slag, water, age, etc.) affects compressive strength using multiple linear regression.",
        accent: Accent::Amber,
    },
    Objective {
        number: "02",
        title: "Fly Ash Impact",
        description: "Test whether including fly ash in a mix significantly affects compressive strength using hypothesis testing (Kruskal-Wallis).",
        accent: Accent::Green,
    },
    Objective {
        number: "03",
        title: "Prediction Tool",
        description: "Build a reliable regression model that the batching plant can use to predict strength before pouring, optimising cost and reducing failures.",
        accent: Accent::Indigo,
    },
];

const METHOD_STEPS: &[&str] = &[
    "1,030 mix trials loaded, entirely numeric, no missing values",
    "Columns renamed for clarity (cement, slag, flyAsh, water, etc.)",
    "Distributions checked via histograms; outliers assessed with boxplots",
    "Correlation matrix identified 4 key predictors: cement, water, superplasticizer, age",
    "Log transformation applied to age & superplasticizer to handle skew",
    "Forward stepwise regression used to build model iteratively",
    "Assumptions tested: linearity, residual independence, normality, homoscedasticity, VIF",
];

const MODEL_STATS: &[Stat] = &[
    Stat {
        value: "81.35",
        unit: Some("%"),
        label: "R² Explained",
        accent: Accent::Green,
    },
    Stat {
        value: "5/5",
        unit: None,
        label: "Assumptions Passed",
        accent: Accent::Amber,
    },
    Stat {
        value: "<1.5",
        unit: None,
        label: "All VIF Values",
        accent: Accent::Indigo,
    },
];

const FLY_ASH_TESTS: &[HypothesisTest] = &[
    HypothesisTest {
        test: "Kruskal-Wallis",
        hypothesis: "H₀: μ(no fly ash) = μ(fly ash)",
        result: "p = 0.2324 → Fail to reject H₀",
        verdict: "No significant difference in strength",
        accent: Accent::Green,
    },
    HypothesisTest {
        test: "Kruskal-Wallis",
        hypothesis: "H₀: μ(coarse) = μ(fine)",
        result: "p = 0.3364 → Fail to reject H₀",
        verdict: "Concrete category doesn't affect strength",
        accent: Accent::Amber,
    },
    HypothesisTest {
        test: "Chi-Square",
        hypothesis: "H₀: Category and fly ash are independent",
        result: "p = 0.9812 → Fail to reject H₀",
        verdict: "No association between category & fly ash use",
        accent: Accent::Indigo,
    },
];

const TAKEAWAYS: &[&str] = &[
    "Cement and curing age are the strongest drivers of strength",
    "Fly ash does not reduce performance: use it confidently",
    "The model captures 81.35% of strength variability",
    "Potential to save £20k+ per major project through optimised mixes",
    "Reduced carbon footprint from lower cement dependency",
];

/// Content of `slide`
pub fn content(slide: SlideId) -> SlideContent {
    match slide {
        SlideId::Title => SlideContent {
            slide,
            badge: "StrataForge Construction Materials Ltd.",
            accent: Accent::Amber,
            heading: "Predicting Concrete Strength",
            emphasis: Some(("Strength", Accent::Amber)),
            lead: Some("Using regression analysis to support better material decisions, reduce waste, and cut procurement costs."),
            body: SlideBody::Tags(TITLE_TAGS),
            footnote: None,
        },
        SlideId::Problem => SlideContent {
            slide,
            badge: "The Business Risk",
            accent: Accent::Red,
            heading: "Why This Project Matters",
            emphasis: None,
            lead: Some("Over 18 years of operations, StrataForge accumulated 1,030 mix trials but still relied on gut feeling for critical strength decisions."),
            body: SlideBody::Cards(PROBLEM_CARDS),
            footnote: None,
        },
        SlideId::Objectives => SlideContent {
            slide,
            badge: "Project Scope",
            accent: Accent::Amber,
            heading: "Three Clear Objectives",
            emphasis: None,
            lead: None,
            body: SlideBody::Objectives(OBJECTIVES),
            footnote: None,
        },
        SlideId::Data => SlideContent {
            slide,
            badge: "Methodology",
            accent: Accent::Indigo,
            heading: "Data & Approach",
            emphasis: None,
            lead: Some("The IMF-style rigour applied to concrete: clean data in, validated model out."),
            body: SlideBody::Steps(METHOD_STEPS),
            footnote: None,
        },
        SlideId::Model => SlideContent {
            slide,
            badge: "Final MLR Model",
            accent: Accent::Green,
            heading: "The Prediction Formula",
            emphasis: None,
            lead: None,
            body: SlideBody::Formula {
                formula: MODEL_FORMULA,
                stats: MODEL_STATS,
            },
            footnote: Some("After log-transforming skewed predictors and using forward stepwise selection across 12 candidate models, Model 9 achieved the best balance of explanatory power and statistical validity. All coefficients are significant at p < 0.001."),
        },
        SlideId::FlyAsh => SlideContent {
            slide,
            badge: "Hypothesis Testing",
            accent: Accent::Green,
            heading: "Fly Ash Does Not Reduce Strength",
            emphasis: Some(("Not", Accent::Green)),
            lead: None,
            body: SlideBody::Tests(FLY_ASH_TESTS),
            footnote: Some("This is a major finding: StrataForge can confidently substitute part of its cement content with fly ash, achieving the same strength while cutting costs and carbon emissions."),
        },
        SlideId::Calculator => SlideContent {
            slide,
            badge: "Interactive Demo",
            accent: Accent::Amber,
            heading: "Strength Prediction Tool",
            emphasis: None,
            lead: None,
            body: SlideBody::Calculator,
            footnote: None,
        },
        SlideId::Impact => SlideContent {
            slide,
            badge: "Business Impact",
            accent: Accent::Green,
            heading: "Exemplary Cost Reduction",
            emphasis: None,
            lead: Some("Consider a typical StrataForge project: a commercial warehouse foundation requiring 2,000 m³ of C30-grade concrete."),
            body: SlideBody::Impact {
                strength_note: "~38 MPa",
                co2_note: "−180t",
            },
            footnote: None,
        },
        SlideId::Summary => SlideContent {
            slide,
            badge: "Key Takeaways",
            accent: Accent::Amber,
            heading: "Data Replaces Guesswork",
            emphasis: None,
            lead: None,
            body: SlideBody::Takeaways(TAKEAWAYS),
            footnote: Some("\"Engineering Strength from the Ground Up\", now backed by evidence."),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slide_has_content() {
        for slide in SlideId::ALL {
            let c = content(slide);
            assert_eq!(c.slide, slide);
            assert!(!c.heading.is_empty());
            assert!(!c.badge.is_empty());
        }
    }

    #[test]
    fn test_only_calculator_uses_estimator() {
        let calculator_slides: Vec<_> = SlideId::ALL
            .iter()
            .filter(|s| content(**s).body == SlideBody::Calculator)
            .collect();
        assert_eq!(calculator_slides, vec![&SlideId::Calculator]);
    }

    #[test]
    fn test_heading_parts() {
        let (before, emph, after) = content(SlideId::FlyAsh).heading_parts();
        assert_eq!(before, "Fly Ash Does ");
        assert_eq!(emph, Some(("Not", Accent::Green)));
        assert_eq!(after, " Reduce Strength");

        let (before, emph, after) = content(SlideId::Summary).heading_parts();
        assert_eq!(before, "Data Replaces Guesswork");
        assert!(emph.is_none());
        assert!(after.is_empty());
    }

    #[test]
    fn test_formula_matches_estimator_coefficients() {
        use crate::calculations::strength::{
            AGE_LN_COEFF, CEMENT_COEFF, INTERCEPT_MPA, SLAG_COEFF, SUPERPLASTICIZER_LN_COEFF,
            WATER_COEFF,
        };
        for coeff in [
            INTERCEPT_MPA,
            CEMENT_COEFF,
            SUPERPLASTICIZER_LN_COEFF,
            WATER_COEFF,
            AGE_LN_COEFF,
            SLAG_COEFF,
        ] {
            assert!(MODEL_FORMULA.contains(&coeff.to_string()), "{coeff} missing from formula");
        }
    }
}
