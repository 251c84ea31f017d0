//! Prompt construction for classification requests.
//!
//! One user prompt per request: the item text (or an instruction to look at
//! the attached image), numbered instructions, the subcategory legend and
//! an example of the exact reply shape.

use madds_taxonomy::{LegendBuilder, TaxonomyStore};

use crate::request::{ClassificationRequest, ItemKind, SuggestionShape};

/// Builds classification prompts.
pub struct ClassificationPrompt;

impl ClassificationPrompt {
    /// System prompt shared by every classification request.
    pub fn system_prompt() -> String {
        let mut prompt = String::new();
        prompt.push_str("You classify items for MADDS Network, a mutual aid sharing network.\n");
        prompt.push_str("Codes come from the Mutual Aid Dewey Decimal System (MADDS).\n");
        prompt.push_str("Only use three-digit subcategory codes that appear in the legend you are given.\n");
        prompt.push_str("Respond with a single JSON object and nothing else.\n");
        prompt
    }

    /// Build the user prompt for a request.
    pub fn build(store: &TaxonomyStore, request: &ClassificationRequest) -> String {
        let mut prompt = String::new();

        prompt.push_str(Self::opening(request));
        prompt.push_str("\n\n");

        let title = non_empty_or(&request.title, "Not provided");
        let description = non_empty_or(&request.description, "Not provided");
        match request.kind {
            ItemKind::Offer => prompt.push_str("Item Information:\n"),
            ItemKind::Need => prompt.push_str("What they're looking for:\n"),
        }
        prompt.push_str(&format!("Title: {}\n", title));
        prompt.push_str(&format!("Description: {}\n\n", description));

        prompt.push_str("Based on this information:\n");
        for (i, step) in Self::instructions(request).iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, step));
        }

        prompt.push_str("\nMADDS Categories:\n");
        prompt.push_str(&LegendBuilder::build_legend(store));
        prompt.push_str("\n\nAnswer at subcategory level: a three-digit code such as 110 or 220.\n");

        prompt.push_str("\nReturn your analysis in this exact JSON format:\n");
        prompt.push_str(&Self::reply_example(request));
        prompt.push('\n');

        prompt
    }

    fn opening(request: &ClassificationRequest) -> &'static str {
        match (request.kind, request.has_image()) {
            (ItemKind::Offer, false) => {
                "Analyze this resource someone wants to share in a mutual aid network."
            }
            (ItemKind::Offer, true) => {
                "Analyze this image of a resource someone wants to share in a mutual aid network."
            }
            (ItemKind::Need, false) => {
                "Analyze this need/request someone posted in a mutual aid network."
            }
            (ItemKind::Need, true) => {
                "Analyze this image of something someone needs, posted in a mutual aid network."
            }
        }
    }

    fn instructions(request: &ClassificationRequest) -> Vec<String> {
        let mut steps = Vec::new();

        if request.has_image() {
            steps.push("Identify the item shown in the attached image (be specific)".to_string());
        }

        match request.shape {
            SuggestionShape::Single => {
                steps.push("Suggest the best MADDS classification code".to_string());
            }
            SuggestionShape::Ranked { max } => {
                steps.push(format!(
                    "Suggest up to {} MADDS classification codes, best first, each with a short reason",
                    max.max(1)
                ));
            }
        }

        steps.push("Improve the title and description if they are vague".to_string());

        match request.kind {
            ItemKind::Offer => {
                steps.push("Infer likely condition if not specified (new, like_new, used, as_is)".to_string())
            }
            ItemKind::Need => {
                steps.push("Suggest urgency level (emergency, urgent, soon, flexible)".to_string())
            }
        }

        steps
    }

    fn reply_example(request: &ClassificationRequest) -> String {
        let (title_field, description_field) = if request.has_image() {
            ("title", "description")
        } else {
            ("improved_title", "improved_description")
        };

        let mut lines = vec![
            format!("  \"{}\": \"Better title if original was vague (or keep original)\"", title_field),
            format!(
                "  \"{}\": \"Enhanced description with helpful details (or keep original)\"",
                description_field
            ),
        ];

        match request.kind {
            ItemKind::Offer => lines.push("  \"condition\": \"new|like_new|used|as_is\"".to_string()),
            ItemKind::Need => {
                lines.push("  \"urgency\": \"emergency|urgent|soon|flexible\"".to_string())
            }
        }

        match request.shape {
            SuggestionShape::Single => lines.push("  \"suggested_code\": \"110\"".to_string()),
            SuggestionShape::Ranked { .. } => lines.push(
                [
                    "  \"suggested_codes\": [",
                    "    {\"code\": \"110\", \"reason\": \"why this fits best\"},",
                    "    {\"code\": \"210\", \"reason\": \"alternate possibility\"}",
                    "  ]",
                ]
                .join("\n"),
            ),
        }

        lines.push("  \"confidence\": \"high|medium|low\"".to_string());

        format!("{{\n{}\n}}", lines.join(",\n"))
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    #[test]
    fn test_offer_prompt() {
        let request = ClassificationRequest::offer("Winter coat size M", "");
        let prompt = ClassificationPrompt::build(&store(), &request);

        assert!(prompt.starts_with("Analyze this resource someone wants to share"));
        assert!(prompt.contains("Title: Winter coat size M"));
        assert!(prompt.contains("Description: Not provided"));
        assert!(prompt.contains("110 = NOURISH PLANT (Plant Proteins)"));
        assert!(prompt.contains("\"suggested_code\": \"110\""));
        assert!(prompt.contains("\"condition\""));
        assert!(!prompt.contains("\"urgency\""));
        assert!(!prompt.contains("110.300"));
    }

    #[test]
    fn test_ranked_need_prompt() {
        let request = ClassificationRequest::need("Crib", "For a baby due in May")
            .with_shape(SuggestionShape::Ranked { max: 3 });
        let prompt = ClassificationPrompt::build(&store(), &request);

        assert!(prompt.contains("What they're looking for:"));
        assert!(prompt.contains("Suggest up to 3 MADDS classification codes"));
        assert!(prompt.contains("\"suggested_codes\": ["));
        assert!(prompt.contains("emergency|urgent|soon|flexible"));
    }

    #[test]
    fn test_image_prompt_uses_image_fields() {
        let request = ClassificationRequest::offer("", "")
            .with_image("https://blobs.example/chair.jpg")
            .with_shape(SuggestionShape::ranked());
        let prompt = ClassificationPrompt::build(&store(), &request);

        assert!(prompt.starts_with("Analyze this image of a resource"));
        assert!(prompt.contains("1. Identify the item shown in the attached image"));
        assert!(prompt.contains("\"title\": "));
        assert!(!prompt.contains("improved_title"));
    }

    #[test]
    fn test_system_prompt() {
        assert!(ClassificationPrompt::system_prompt().contains("MADDS Network"));
    }
}
