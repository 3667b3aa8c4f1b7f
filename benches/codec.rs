use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use spitz_stream::{Reader, Writer};

const TASKS: u32 = 1000;

fn encode(writer: &mut Writer) {
    for i in 0..TASKS {
        writer
            .write_u64(u64::from(i))
            .write_i32(-(i as i32))
            .write_f64(f64::from(i) * 0.5)
            .write_bool(i % 2 == 0)
            .write_string("task payload")
            .write_bytes(&[0xAB; 16]);
    }
}

fn decode(data: &[u8]) {
    let mut reader = Reader::new(data);
    for _ in 0..TASKS {
        black_box(reader.read_u64().unwrap());
        black_box(reader.read_i32().unwrap());
        black_box(reader.read_f64().unwrap());
        black_box(reader.read_bool().unwrap());
        black_box(reader.read_string().unwrap());
        black_box(reader.read_slice(16).unwrap());
    }
    assert!(!reader.has_data());
}

pub fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let mut encoded = Writer::new();
    encode(&mut encoded);
    let encoded = encoded.freeze();
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function(format!("encode_cnt-{TASKS}"), |bencher| {
        bencher.iter_batched(
            Writer::new,
            |mut writer| {
                encode(&mut writer);
                writer
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(format!("decode_cnt-{TASKS}"), |bencher| {
        bencher.iter(|| decode(black_box(&encoded)));
    });

    group.finish();
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
