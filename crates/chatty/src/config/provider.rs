//! API key environment variables for OpenAI-compatible providers

/// Base URL prefixes and the environment variable holding their API key
pub const PROVIDER_KEYS: &[(&str, &str)] = &[
    ("https://api.groq.com", "GROQ_API_KEY"),
    ("https://api.fireworks.ai", "FIREWORKS_API_KEY"),
    ("https://api.mistral.ai", "MISTRAL_API_KEY"),
    ("https://api.hyperbolic.xyz", "HYPERBOLIC_API_KEY"),
    ("https://api.deepseek.com", "DEEPSEEK_API_KEY"),
    ("https://api.llama.com", "LLAMA_API_KEY"),
    ("https://api.moonshot.ai", "MOONSHOT_API_KEY"),
];

/// Get the API key variable for a base URL, falling back to `OPENAI_API_KEY`
pub fn api_key_env(base_url: &str) -> &'static str {
    PROVIDER_KEYS
        .iter()
        .find(|(prefix, _)| base_url.starts_with(prefix))
        .map(|(_, var)| *var)
        .unwrap_or("OPENAI_API_KEY")
}
