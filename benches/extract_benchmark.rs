//! Benchmarks for docx-text extraction performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

/// Creates a synthetic DOCX document with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r><w:t xml:space="preserve">Paragraph {} has </w:t></w:r>
      <w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r>
      <w:r><w:t xml:space="preserve"> and plain runs &amp; an entity.</w:t></w:r>
    </w:p>"#,
            i
        ));
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark full extraction from an in-memory package.
fn bench_extract_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_text");

    for para_count in [10, 100, 1000, 10000].iter() {
        let data = create_test_docx(*para_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = docx_text::extract_text_from_bytes(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark run collection on already decoded markup.
fn bench_collect_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_text_runs");

    for para_count in [100, 1000, 10000].iter() {
        let data = create_test_docx(*para_count);
        let xml = docx_text::Package::from_bytes(data)
            .unwrap()
            .read_xml(docx_text::docx::DOCUMENT_PART)
            .unwrap();

        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &xml,
            |b, xml| {
                b.iter(|| {
                    let _ = docx_text::docx::collect_text_runs(black_box(xml));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract_text, bench_collect_runs);
criterion_main!(benches);
