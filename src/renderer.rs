//! Template renderer for flaskgen.
//! A template is compiled into a flat list of instructions which is then
//! interpreted against a [`TemplateContext`]. Supported markers:
//!
//! * `{{ field }}` - substitutes a scalar field such as `project_name`
//! * `{% if flag %}` / `{% else %}` / `{% endif %}` - conditional blocks over the
//!   `has_*` flags, which may be nested
//!
//! Text outside of markers, whitespace included, is emitted verbatim.
use crate::config::TemplateContext;
use log::warn;
use thiserror::Error;

/// Reasons a template could not be rendered. Never surfaced to the caller of
/// [`render`], which falls back to the raw template instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),

    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    #[error("'{0}' without a matching 'if'")]
    Unmatched(&'static str),

    #[error("'else' used twice in one block")]
    DuplicateElse,

    #[error("'if' block is never closed")]
    UnclosedBlock,

    #[error("empty substitution marker")]
    EmptyField,

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// One step of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// Copy literal text to the output
    Emit(&'a str),
    /// Copy the value of a context field to the output
    Substitute(&'a str),
    /// Continue at `target` when `flag` is false
    BranchUnless { flag: &'a str, target: usize },
    /// Continue at the given instruction
    Jump(usize),
}

/// Conditional block awaiting its `else` or `endif`, with the index of the
/// instruction whose target is still unresolved.
enum OpenBlock {
    If(usize),
    Else(usize),
}

const UNRESOLVED: usize = usize::MAX;

fn find_tag(source: &str) -> Option<usize> {
    match (source.find("{{"), source.find("{%")) {
        (Some(field), Some(block)) => Some(field.min(block)),
        (field, block) => field.or(block),
    }
}

/// Points the pending jump at `at` to the next instruction to be emitted.
fn patch(program: &mut [Instruction<'_>], at: usize) {
    let here = program.len();
    match &mut program[at] {
        Instruction::BranchUnless { target, .. } | Instruction::Jump(target) => *target = here,
        _ => {}
    }
}

fn directive<'a>(
    inner: &'a str,
    program: &mut Vec<Instruction<'a>>,
    open: &mut Vec<OpenBlock>,
) -> Result<(), RenderError> {
    let mut words = inner.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("if"), Some(flag), None) => {
            open.push(OpenBlock::If(program.len()));
            program.push(Instruction::BranchUnless {
                flag,
                target: UNRESOLVED,
            });
        }
        (Some("else"), None, None) => match open.pop() {
            Some(OpenBlock::If(branch)) => {
                open.push(OpenBlock::Else(program.len()));
                program.push(Instruction::Jump(UNRESOLVED));
                patch(program, branch);
            }
            Some(OpenBlock::Else(_)) => return Err(RenderError::DuplicateElse),
            None => return Err(RenderError::Unmatched("else")),
        },
        (Some("endif"), None, None) => match open.pop() {
            Some(OpenBlock::If(at)) | Some(OpenBlock::Else(at)) => patch(program, at),
            None => return Err(RenderError::Unmatched("endif")),
        },
        _ => return Err(RenderError::UnknownDirective(inner.to_string())),
    }
    Ok(())
}

/// Compiles template source into instructions.
///
/// # Errors
/// Any syntax problem: unterminated or unknown tags, unbalanced blocks, empty
/// substitution markers.
pub fn compile(source: &str) -> Result<Vec<Instruction<'_>>, RenderError> {
    let mut program = Vec::new();
    let mut open = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(start) = find_tag(rest) {
        let (text, tag) = rest.split_at(start);
        if !text.is_empty() {
            program.push(Instruction::Emit(text));
        }

        let is_block = tag.starts_with("{%");
        let close = if is_block { "%}" } else { "}}" };
        let len = tag[2..]
            .find(close)
            .ok_or(RenderError::UnterminatedTag(offset + start))?;
        let inner = tag[2..2 + len].trim();

        if is_block {
            directive(inner, &mut program, &mut open)?;
        } else if inner.is_empty() {
            return Err(RenderError::EmptyField);
        } else {
            program.push(Instruction::Substitute(inner));
        }

        let consumed = start + len + 4;
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        program.push(Instruction::Emit(rest));
    }
    if !open.is_empty() {
        return Err(RenderError::UnclosedBlock);
    }
    Ok(program)
}

/// Runs compiled instructions. Flags and fields are resolved lazily, so a
/// marker inside a block that is skipped is never looked up.
pub fn execute(
    program: &[Instruction<'_>],
    context: &TemplateContext,
) -> Result<String, RenderError> {
    let mut output = String::new();
    let mut pc = 0;

    while let Some(instruction) = program.get(pc) {
        pc += 1;
        match instruction {
            Instruction::Emit(text) => output.push_str(text),
            Instruction::Substitute(name) => {
                let value = context
                    .field(name)
                    .ok_or_else(|| RenderError::UnknownField(name.to_string()))?;
                output.push_str(value);
            }
            Instruction::BranchUnless { flag, target } => {
                let enabled = context
                    .flag(flag)
                    .ok_or_else(|| RenderError::UnknownFlag(flag.to_string()))?;
                if !enabled {
                    pc = *target;
                }
            }
            Instruction::Jump(target) => pc = *target,
        }
    }

    Ok(output)
}

/// Compiles and executes a template, reporting why rendering failed.
pub fn try_render(template: &str, context: &TemplateContext) -> Result<String, RenderError> {
    let program = compile(template)?;
    execute(&program, context)
}

/// Renders a template, returning the template source unchanged if it cannot
/// be rendered.
pub fn render(template: &str, context: &TemplateContext) -> String {
    match try_render(template, context) {
        Ok(rendered) => rendered,
        Err(e) => {
            warn!("Template could not be rendered, using it as is: {}", e);
            template.to_string()
        }
    }
}
