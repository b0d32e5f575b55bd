use tcscript_compiler::{CompileOutput, Compiler, CompilerConfig, DelayMode};

/// Compile a script with the default (sticky) delay mode
#[allow(dead_code)]
pub fn compile(source: &str) -> CompileOutput {
    Compiler::default().compile(source)
}

/// Compile a script where each `Wait_us` applies to one packet only
#[allow(dead_code)]
pub fn compile_one_shot(source: &str) -> CompileOutput {
    Compiler::new(CompilerConfig {
        delay_mode: DelayMode::OneShot,
    })
    .compile(source)
}

/// Indices of the bytes that carry a nonzero delay
#[allow(dead_code)]
pub fn delayed_bytes(output: &CompileOutput) -> Vec<(usize, u64)> {
    output
        .delay_stream()
        .into_iter()
        .enumerate()
        .filter(|(_, delay)| *delay != 0)
        .collect()
}
