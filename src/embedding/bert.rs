use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

struct SentenceBertImpl {
    bert: BertModel,
    hidden_size: usize,
}

impl SentenceBertImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;

        // Sentence-transformers recipe: mean pooling over token states.
        // Inputs are single unpadded sequences, so a plain mean over the
        // sequence dimension equals the masked mean.
        output.mean(1)
    }
}

/// BERT sentence encoder (mean pooling, shared immutable weights).
#[derive(Clone)]
pub struct SentenceBert(std::sync::Arc<SentenceBertImpl>);

impl SentenceBert {
    /// Loads `config.json` + `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = SentenceBertImpl::load(vb, &config)?;

        Ok(Self(std::sync::Arc::new(model)))
    }

    /// Runs the forward pass and returns the pooled sentence vector, shape `[batch, hidden]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }

    /// Hidden size of the loaded model (the sentence-embedding dimension).
    pub fn hidden_size(&self) -> usize {
        self.0.hidden_size
    }
}
