//! Prompt 模板
//!
//! 三个接口各对应一个纯函数模板。用户代码原样嵌入代码块，不做转义。

/// 代码块格式说明（解释代码）
const EXPLAIN_FORMAT_HINT: &str = r#"When providing code examples or showing parts of the original code, always wrap them in markdown code blocks like this:
```python
your_code_here
```"#;

/// 代码块格式说明（错误分析与建议）
const EXAMPLE_FORMAT_HINT: &str = r#"always wrap them in markdown code blocks like this:
```python
your_code_example
```
Use the appropriate language identifier after the backticks (e.g., `python`, `javascript`, `java`)."#;

/// 附带代码的结尾段落
fn code_section(language: &str, code: &str) -> String {
    format!("Here is the {language} code:\n```{language}\n{code}\n```")
}

/// 构建代码解释 Prompt
pub fn explain_code_prompt(code: &str, language: &str) -> String {
    format!(
        "As an expert programming tutor for beginners, explain the following {language} code.
Break down the code line-by-line or in small, logical blocks.
Focus on clarity, simplicity, and explain why each part works.
Avoid being overly verbose where possible.
Do not just re-write the code. Provide actionable understanding.

{EXPLAIN_FORMAT_HINT}

{}
",
        code_section(language, code)
    )
}

/// 构建错误分析 Prompt
pub fn analyze_error_prompt(code: &str, language: &str, error_message: &str) -> String {
    format!(
        "As an expert debugger and programming tutor for beginners, analyze the following error message
in the context of the provided {language} code.
Explain:
1. What the error message means in simple terms.
2. Why it occurred in this specific code.
3. Provide clear, actionable steps on how to fix it.
Focus on explaining the concepts involved for a beginner.

When providing code examples or showing parts of the original code/fixes, {EXAMPLE_FORMAT_HINT}

Here is the error message:
```
{error_message}
```

{}
",
        code_section(language, code)
    )
}

/// 目标导向的建议段落开头，用于判断 Prompt 是否包含用户目标
pub const GOAL_CLAUSE_PREFIX: &str = "The user is trying to achieve the following with their code:";

/// 构建改进建议 Prompt
///
/// 问题描述去掉空白后非空时追加目标导向段落，否则追加通用改进段落。
pub fn suggestions_prompt(code: &str, language: &str, problem_description: Option<&str>) -> String {
    let base = format!(
        "As an expert programming tutor for beginners, review the following {language} code.
Provide helpful suggestions for improvement, best practices, or potential issues.
Explain your suggestions clearly, in simple terms, and provide code examples where applicable.
Aim to teach concepts rather than just providing solutions.

When providing code examples, {EXAMPLE_FORMAT_HINT}
"
    );

    let direction = match problem_description.filter(|d| !d.trim().is_empty()) {
        Some(goal) => format!(
            "{GOAL_CLAUSE_PREFIX} \"{goal}\".\nGiven that goal, how can the code be improved or fixed?"
        ),
        None => format!(
            "Provide general improvements, optimizations, or best practices for the following {language} code."
        ),
    };

    format!("{base}\n{direction}\n\n{}\n", code_section(language, code))
}
