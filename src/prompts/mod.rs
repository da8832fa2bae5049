pub mod benchmark_analysis_prompt;
