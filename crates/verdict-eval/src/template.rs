use std::collections::HashMap;

use verdict_prompts::PromptTemplate;

const CRITERIA_BASE_TEMPLATE: &str = concat!(
    "Determine if the following text is {{ criteria }}. {{ description }}",
    "First, explain step-by-step why you think the text is or is not {{ criteria }}. Then provide ",
    "a single word label; 'true' if the text is {{ criteria }} or 'false' if the text is not ",
    "{{ criteria }}. Here is an example template for whether the text meets a criteria:\n\n",
    "CRITERIA: the text is '{{ criteria }}'\n",
    "TEXT: *the provided text to evaluate*\n",
    "EXPLANATION: *a step by step explanation of your reasoning for whether the text meets ",
    "the criteria*\n",
    "LABEL: *true or false*\n\n",
    "Follow this template for the following example:\n\n",
    "CRITERIA: the text is '{{ criteria }}'\n",
    "TEXT: {{ text }}\n",
    "EXPLANATION: ",
);

const CRITERIA_DESCRIPTION: &str =
    "In this context, '{{ criteria }}' means the text '{{ description }}'. ";

/// Prompt for judging whether a response addresses a query. Open variables:
/// `query` and `response`.
pub const RELEVANCE_TEMPLATE: &str = concat!(
    "Determine if the following response is relevant to the query. In this context, ",
    "'relevance' means that the response directly addresses the core question or topic of the ",
    "query. First, explain step-by-step why you think the text is or is not relevant. ",
    "Then provide a single word label; 'true' if the text is relevant or 'false' if the text ",
    "is not relevant. ",
    "Here is an example template for your response:\n\n",
    "CRITERIA: the response is 'relevant' to the query\n",
    "QUERY: *text that contains a query*\n",
    "RESPONSE: *a response that may or may not be relevant to the query*\n",
    "EXPLANATION: *a step by step explanation of your reasoning for whether or not the ",
    "response is relevant to the query*\n",
    "LABEL: *true or false*\n\n",
    "Follow this template for the following example:\n\n",
    "CRITERIA: the response is 'relevant' to the query\n",
    "QUERY: {{ query }}\n",
    "RESPONSE: {{ response }}\n",
    "EXPLANATION: ",
);

/// Build the judge prompt for `criteria`, leaving only `{{ text }}` open.
pub fn build_criteria_template(criteria: &str, description: &str) -> PromptTemplate {
    let description = PromptTemplate::new(CRITERIA_DESCRIPTION).partial(&HashMap::from([
        ("criteria".to_string(), criteria.to_string()),
        ("description".to_string(), description.to_string()),
    ]));
    PromptTemplate::new(CRITERIA_BASE_TEMPLATE).partial(&HashMap::from([
        ("criteria".to_string(), criteria.to_string()),
        ("description".to_string(), description.as_str().to_string()),
    ]))
}

pub fn relevance_template() -> PromptTemplate {
    PromptTemplate::new(RELEVANCE_TEMPLATE)
}
