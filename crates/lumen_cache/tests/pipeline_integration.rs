//! Tests driving the descriptor cache the way the build pipeline does:
//! a transform stage compiles, then style and hot-update stages retrieve
//! the result by filename alone.

use std::path::Path;

use lumen_cache::{CompileRequest, DescriptorCache};
use lumen_compile::{
    Binding, CompileError, CompileOptions, CompiledComponent, ComponentCompiler, ExtraOptions,
    GeneratedOutput,
};

/// Compiler stub that reports one binding per `let` occurrence, so binding
/// lists change when the source gains or loses state.
struct StubCompiler;

impl ComponentCompiler for StubCompiler {
    fn compile(
        &self,
        filename: &Path,
        source: &str,
        options: &CompileOptions,
        _extra: &ExtraOptions,
        ssr: bool,
    ) -> Result<CompiledComponent, CompileError> {
        if source.is_empty() {
            return Err(CompileError::new(filename, "empty component"));
        }
        let bindings = source
            .match_indices("let ")
            .enumerate()
            .map(|(i, _)| Binding::new(format!("var{i}")))
            .collect();
        Ok(CompiledComponent {
            js: GeneratedOutput::from_code(format!(
                "/* {} dev={} */ {source}",
                if ssr { "ssr" } else { "dom" },
                options.dev
            )),
            css: GeneratedOutput::from_code("p{margin:0}"),
            warnings: Vec::new(),
            bindings,
        })
    }
}

fn dev_request<'a>(
    filename: &'a Path,
    source: &'a str,
    compile_options: &'a CompileOptions,
    extra_options: &'a ExtraOptions,
) -> CompileRequest<'a> {
    CompileRequest {
        filename,
        source,
        root: Path::new("/proj"),
        is_production: false,
        compile_options,
        extra_options,
        ssr: false,
    }
}

#[test]
fn style_stage_sees_what_transform_stage_compiled() {
    let mut cache = DescriptorCache::new();
    let opts = CompileOptions { dev: true, ..CompileOptions::default() };
    let extra = ExtraOptions::default();
    let path = Path::new("/proj/src/App.lumen");

    // Transform stage.
    cache
        .compile_and_cache(&StubCompiler, &dev_request(path, "<p>hi</p>", &opts, &extra))
        .unwrap();

    // Style stage runs later with only the filename.
    let descriptor = cache.lookup(path).expect("style stage after transform stage");
    assert_eq!(descriptor.css.code, "p{margin:0}");
    assert!(descriptor.compile_options.dev);
}

#[test]
fn hot_update_diffs_bindings_across_generations() {
    let mut cache = DescriptorCache::new();
    let opts = CompileOptions::default();
    let extra = ExtraOptions { hot: true, ..ExtraOptions::default() };
    let path = Path::new("/proj/src/Counter.lumen");

    cache
        .compile_and_cache(&StubCompiler, &dev_request(path, "let count = 0;", &opts, &extra))
        .unwrap();

    // An edit arrives: snapshot the outgoing generation, then recompile.
    let outgoing = cache.lookup(path).unwrap().clone();
    cache.set_prior(path, outgoing);
    cache
        .compile_and_cache(
            &StubCompiler,
            &dev_request(path, "let count = 0; let doubled = 0;", &opts, &extra),
        )
        .unwrap();

    let prev = cache.prior(path).unwrap();
    let curr = cache.lookup(path).unwrap();
    assert_eq!(prev.bindings.len(), 1);
    assert_eq!(curr.bindings.len(), 2);
    // Dev ids stay stable across the edit, so id-keyed consumers don't thrash.
    assert_eq!(prev.content_id, curr.content_id);
}

#[test]
fn production_rebuild_of_changed_content_busts_the_id() {
    let mut cache = DescriptorCache::new();
    let opts = CompileOptions::default();
    let extra = ExtraOptions::default();
    let path = Path::new("/proj/src/App.lumen");

    let prod = |source: &'static str| CompileRequest {
        is_production: true,
        ..dev_request(path, source, &opts, &extra)
    };

    let first = cache.compile_and_cache(&StubCompiler, &prod("<p>v1</p>")).unwrap().content_id;
    let second = cache.compile_and_cache(&StubCompiler, &prod("<p>v2</p>")).unwrap().content_id;
    assert_ne!(first, second);
}

#[test]
fn failed_recompile_leaves_pipeline_state_usable() {
    let mut cache = DescriptorCache::new();
    let opts = CompileOptions::default();
    let extra = ExtraOptions::default();
    let path = Path::new("/proj/src/App.lumen");

    cache
        .compile_and_cache(&StubCompiler, &dev_request(path, "<p>ok</p>", &opts, &extra))
        .unwrap();

    // A broken edit fails to compile; the error surfaces to the caller...
    let err = cache
        .compile_and_cache(&StubCompiler, &dev_request(path, "", &opts, &extra))
        .unwrap_err();
    assert_eq!(err.filename, path);

    // ...and later stages still see the last good generation.
    assert!(cache.lookup(path).unwrap().js.code.contains("<p>ok</p>"));
}
