pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod search;
pub mod query;
pub mod ingest;
pub mod stats;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           LETOPIS DATA FLOW                                  │
└──────────────────────────────────────────────────────────────────────────────┘

  documents.jsonl
        │
        ▼
┌──────────────────┐   ┌──────────────────────┐   ┌──────────────────────────┐
│ ingest::jsonl    │──▶│ ingest::html         │──▶│ analysis::Analyzer       │
│ JsonlSource      │   │ strip_and_decode     │   │ StandardTokenizer        │
│ • RawDocument    │   │ • tags → spaces      │   │ • lowercase, positions   │
│   url/html/src   │   │ • script/style gone  │   │ StemmerFilter            │
└──────────────────┘   │ • entities decoded   │   │ • RussianStemmer         │
                       └──────────────────────┘   └────────────┬─────────────┘
                                                               │ stemmed tokens
                                  ┌────────────────────────────┼───────────┐
                                  ▼                                        ▼
                 ┌───────────────────────────────┐      ┌─────────────────────┐
                 │ index::InvertedIndex          │      │ stats::ZipfAnalyzer │
                 │ • postings: ProbeTable<       │      │ • ProbeTable<i64>   │
                 │     PostingList>              │      │ • total_terms       │
                 │ • documents: Vec<DocId>       │      └──────────┬──────────┘
                 └───────┬───────────────┬───────┘                 │
                         │               │                         ▼
         storage::index_file             │                zipf_analysis.csv
         inverted_index.bin              ▼
                         ┌──────────────────────────────────┐
                         │ search::BooleanSearch            │
                         │ • QueryParser → [QueryToken]     │
                         │ • stem, lookup, SortedMerge      │
                         │ • optional frequency ranking     │
                         └──────────────────────────────────┘

  core::engine::SearchEngine drives the whole pipeline and owns one of each.
*/
